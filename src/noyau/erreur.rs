// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// - Famille « entrée invalide » : signalée avant la moindre étape.
// - PivotIntrouvable : incohérence interne (un déterminant déclaré non nul
//   mais aucun pivot exploitable) ; fatal, distinct de la singularité
//   ordinaire — qui est un résultat (Inversion::Singuliere), pas une erreur.

use thiserror::Error;

use super::inverse::MethodeInverse;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurMatrice {
    #[error("matrice vide")]
    Vide,

    #[error("matrice {n}×{n} trop petite (minimum 2×2)")]
    TropPetite { n: usize },

    #[error("matrice non carrée : la ligne {ligne} a {obtenu} colonnes (attendu {attendu})")]
    NonCarree {
        ligne: usize,
        obtenu: usize,
        attendu: usize,
    },

    #[error("entrée non finie en ligne {ligne}, colonne {colonne} : {valeur}")]
    EntreeNonFinie {
        ligne: usize,
        colonne: usize,
        valeur: f64,
    },

    #[error("ligne de développement {ligne} hors bornes (matrice {taille}×{taille})")]
    LigneHorsBornes { ligne: usize, taille: usize },

    #[error("méthode « {methode} » inapplicable à une matrice {taille}×{taille}")]
    MethodeInapplicable {
        methode: MethodeInverse,
        taille: usize,
    },

    #[error("aucun pivot exploitable en colonne {colonne} malgré un déterminant non nul (incohérence interne)")]
    PivotIntrouvable { colonne: usize },
}
