//! matrices_demarche — noyau matriciel « pas à pas »
//!
//! Calcule le déterminant et l'inverse de petites matrices réelles (2×2 à
//! 4×4) en produisant une démarche complète : une suite ordonnée d'étapes
//! structurées (titre, description, expression, instantané de matrice),
//! chaque valeur affichée en fraction exacte ou meilleure approximation
//! rationnelle plutôt qu'en décimal brut.
//!
//! Le noyau est une fonction pure de son entrée : aucune E/S, aucun état
//! partagé entre invocations, démarche identique octet pour octet à entrée
//! et stratégie identiques. Le rendu des étapes (et toute explication en
//! langage naturel) est le travail des couches appelantes — le noyau ne
//! présume rien de la présentation.

pub mod noyau;

pub use noyau::{
    determinant, determinant_par, developpement_cofacteurs, inverse, inverse_par, Demarche,
    ErreurMatrice, Etape, Inversion, Matrice, MethodeInverse, ResultatDeterminant,
    StrategieDeterminant,
};
