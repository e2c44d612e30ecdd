// src/noyau/inverse.rs
//
// Inverse « pas à pas », trois méthodes mutuellement cohérentes :
// - Formule2x2 : forme fermée, 2×2 seulement
// - Adjointe   : cofacteurs -> transposée -> division par det
// - GaussJordan: [A | I], pivots, normalisation, élimination bilatérale
//
// L'inversibilité est toujours pré-vérifiée par le déterminant (stratégie
// élimination : même logique de pivot que Gauss-Jordan). La singularité
// est un résultat de plein droit, avec la démarche partielle ; le cas
// « aucun pivot » résiduel est une erreur fatale, jamais un résultat.

use std::fmt;

use super::determinant::{cherche_pivot, determinant_par, StrategieDeterminant, EPSILON_PIVOT};
use super::erreur::ErreurMatrice;
use super::etapes::{sous, Demarche, Etape};
use super::fraction::format_valeur;
use super::matrice::Matrice;

/// Seuil de singularité : un déterminant sous cette magnitude est traité
/// comme nul (le zéro exact est rare en entrée flottante).
pub const EPSILON_SINGULIER: f64 = 1e-9;

/// Méthode d'inversion, au choix de l'appelant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodeInverse {
    /// A⁻¹ = (1/det A)·adj(A), forme fermée. 2×2 seulement.
    Formule2x2,
    /// Matrice des cofacteurs, transposée, division par det. Toute taille.
    Adjointe,
    /// Élimination de Gauss-Jordan sur [A | I]. Toute taille.
    GaussJordan,
}

impl fmt::Display for MethodeInverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MethodeInverse::Formule2x2 => "formule 2×2",
            MethodeInverse::Adjointe => "adjointe / cofacteurs",
            MethodeInverse::GaussJordan => "Gauss-Jordan",
        })
    }
}

/// Résultat d'une inversion. La singularité n'est pas une erreur : c'est
/// une issue attendue, sur laquelle l'appelant doit brancher, avec la
/// démarche accumulée jusqu'à la détection (le pivot dégénéré y figure).
#[derive(Clone, Debug, PartialEq)]
pub enum Inversion {
    Reguliere { inverse: Matrice, demarche: Demarche },
    Singuliere { determinant: f64, demarche: Demarche },
}

/// Inverse par Gauss-Jordan, la méthode valable à toute taille.
pub fn inverse(m: &Matrice) -> Result<Inversion, ErreurMatrice> {
    inverse_par(m, MethodeInverse::GaussJordan)
}

/// Inverse par la méthode demandée.
pub fn inverse_par(m: &Matrice, methode: MethodeInverse) -> Result<Inversion, ErreurMatrice> {
    if methode == MethodeInverse::Formule2x2 && m.taille() != 2 {
        return Err(ErreurMatrice::MethodeInapplicable {
            methode,
            taille: m.taille(),
        });
    }

    // Pré-vérification d'inversibilité. La stratégie élimination partage
    // sa recherche de pivot avec Gauss-Jordan : une colonne sans pivot y
    // donne det = 0 et la sortie Singuliere coupe court avant la méthode.
    let pre = determinant_par(m, StrategieDeterminant::Elimination);
    let det = pre.determinant;
    let mut demarche = pre.demarche;

    if det.abs() < EPSILON_SINGULIER {
        return Ok(Inversion::Singuliere {
            determinant: det,
            demarche,
        });
    }

    let inverse = match methode {
        MethodeInverse::Formule2x2 => formule_2x2(m, det, &mut demarche),
        MethodeInverse::Adjointe => adjointe(m, det, &mut demarche),
        MethodeInverse::GaussJordan => gauss_jordan(m, &mut demarche)?,
    };

    Ok(Inversion::Reguliere { inverse, demarche })
}

/* ------------------------ Outils locaux ------------------------ */

fn divise_par(m: &Matrice, det: f64) -> Matrice {
    Matrice::depuis_lignes(
        m.lignes()
            .iter()
            .map(|l| l.iter().map(|&v| v / det).collect())
            .collect(),
    )
}

/// Déterminant d'un mineur pour la matrice des cofacteurs :
/// primitive en 2×2, valeur d'élimination au-delà (1×1 inclus).
fn valeur_det_mineur(m: &Matrice) -> f64 {
    if m.taille() == 2 {
        m.det_2x2()
    } else {
        determinant_par(m, StrategieDeterminant::Elimination).determinant
    }
}

/* ------------------------ Formule 2×2 ------------------------ */

fn formule_2x2(m: &Matrice, det: f64, demarche: &mut Demarche) -> Matrice {
    let (a, b) = (m[(0, 0)], m[(0, 1)]);
    let (c, d) = (m[(1, 0)], m[(1, 1)]);
    let adj = Matrice::depuis_lignes(vec![vec![d, -b], vec![-c, a]]);
    let inv = divise_par(&adj, det);

    demarche.ajouter(Etape {
        titre: "Formule 2×2".into(),
        description: Some("A⁻¹ = (1/det A)·adj(A).".into()),
        math: Some(format!(
            "A = {}, adj(A) = {}",
            m.format_plate(),
            adj.format_plate()
        )),
        instantane: None,
    });
    demarche.ajouter(Etape {
        titre: "A⁻¹".into(),
        description: Some(format!(
            "On multiplie par 1/det A, avec det A = {}.",
            format_valeur(det)
        )),
        math: Some(format!("A⁻¹ = {}", inv.format_plate())),
        instantane: Some(inv.clone()),
    });

    inv
}

/* ------------------------ Adjointe / cofacteurs ------------------------ */

fn adjointe(m: &Matrice, det: f64, demarche: &mut Demarche) -> Matrice {
    let n = m.taille();

    let mut cof = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            let mineur = m.mineur(i, j);
            let det_mineur = valeur_det_mineur(&mineur);
            let signe = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            cof[i][j] = signe * det_mineur;

            let (r, c) = (sous(i + 1), sous(j + 1));
            demarche.ajouter(Etape {
                titre: format!("Cofacteur C{r}{c}"),
                description: Some(format!(
                    "C{r}{c} = (-1)^({}+{})·det(M{r}{c}).",
                    i + 1,
                    j + 1
                )),
                math: Some(format!(
                    "det(M{r}{c}) = {} ⇒ C{r}{c} = {}",
                    format_valeur(det_mineur),
                    format_valeur(cof[i][j]),
                )),
                instantane: Some(mineur),
            });
        }
    }
    let cof = Matrice::depuis_lignes(cof);
    demarche.ajouter(Etape {
        titre: "Matrice des cofacteurs".into(),
        description: None,
        math: Some(format!("C = {}", cof.format_plate())),
        instantane: Some(cof.clone()),
    });

    let adj = cof.transposee();
    demarche.ajouter(Etape {
        titre: "Adjointe adj(A) = Cᵀ".into(),
        description: None,
        math: Some(format!("adj(A) = {}", adj.format_plate())),
        instantane: Some(adj.clone()),
    });

    let inv = divise_par(&adj, det);
    demarche.ajouter(Etape {
        titre: "A⁻¹".into(),
        description: Some("A⁻¹ = (1/det A)·adj(A).".into()),
        math: Some(format!("A⁻¹ = {}", inv.format_plate())),
        instantane: Some(inv.clone()),
    });

    inv
}

/* ------------------------ Gauss-Jordan ------------------------ */

fn gauss_jordan(m: &Matrice, demarche: &mut Demarche) -> Result<Matrice, ErreurMatrice> {
    let n = m.taille();

    // [A | I]
    let mut aug: Vec<Vec<f64>> = m
        .lignes()
        .iter()
        .enumerate()
        .map(|(i, ligne)| {
            let mut l = ligne.clone();
            l.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            l
        })
        .collect();

    demarche.ajouter(Etape {
        titre: "Matrice augmentée [A | I]".into(),
        description: Some("On construit [A | I] pour transformer le bloc gauche en I.".into()),
        math: Some(format!(
            "[A | I] = {}",
            Matrice::depuis_lignes(aug.clone()).format_augmentee(n)
        )),
        instantane: Some(Matrice::depuis_lignes(aug.clone())),
    });

    for k in 0..n {
        if aug[k][k].abs() < EPSILON_PIVOT {
            // La pré-vérification a dit « non nul » : une colonne morte ici
            // est une incohérence interne, pas une issue utilisateur.
            let sw = cherche_pivot(&aug, k, k + 1)
                .ok_or(ErreurMatrice::PivotIntrouvable { colonne: k })?;
            aug.swap(k, sw);
            demarche.ajouter(Etape {
                titre: format!("Échange R{} ↔ R{}", sous(k + 1), sous(sw + 1)),
                description: Some(
                    "On choisit un pivot exploitable plus bas dans la colonne.".into(),
                ),
                math: None,
                instantane: Some(Matrice::depuis_lignes(aug.clone())),
            });
        }

        let pivot = aug[k][k];
        for v in aug[k].iter_mut() {
            *v /= pivot;
        }
        demarche.ajouter(Etape {
            titre: format!("Normaliser R{}", sous(k + 1)),
            description: Some(format!(
                "R{} ← R{} / {} pour rendre le pivot égal à 1.",
                sous(k + 1),
                sous(k + 1),
                format_valeur(pivot)
            )),
            math: None,
            instantane: Some(Matrice::depuis_lignes(aug.clone())),
        });

        for i in 0..n {
            if i == k {
                continue;
            }
            let f = aug[i][k];
            if f.abs() < EPSILON_PIVOT {
                continue;
            }
            for j in 0..(2 * n) {
                aug[i][j] -= f * aug[k][j];
            }
            demarche.ajouter(Etape {
                titre: format!("Élimination en R{}", sous(i + 1)),
                description: Some(format!(
                    "R{} ← R{} - {}·R{} pour annuler la colonne.",
                    sous(i + 1),
                    sous(i + 1),
                    format_valeur(f),
                    sous(k + 1)
                )),
                math: None,
                instantane: Some(Matrice::depuis_lignes(aug.clone())),
            });
        }
    }

    let inv = Matrice::depuis_lignes(aug.iter().map(|l| l[n..].to_vec()).collect());
    demarche.ajouter(Etape {
        titre: "Lecture de A⁻¹".into(),
        description: Some("Le bloc droit est A⁻¹.".into()),
        math: Some(format!("A⁻¹ = {}", inv.format_plate())),
        instantane: Some(inv.clone()),
    });

    Ok(inv)
}
