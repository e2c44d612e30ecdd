// src/noyau/determinant.rs
//
// Déterminant « pas à pas », deux stratégies :
// - Cofacteurs  : forme fermée en 2×2, première ligne en 3×3,
//                 développement sur une ligne au choix au-delà
// - Elimination : triangulation vers l'avant avec pivot partiel
//
// Chaque stratégie émet sa démarche ; les deux doivent concorder (à la
// tolérance flottante près) sur toute matrice carrée.

use super::erreur::ErreurMatrice;
use super::etapes::{sous, Demarche, Etape};
use super::fraction::format_valeur;
use super::matrice::Matrice;

/// Seuil de pivot : en dessous, une entrée est traitée comme nulle pour
/// les décisions de pivot. Les valeurs stockées ne sont jamais arrondies.
pub const EPSILON_PIVOT: f64 = 1e-12;

/// Stratégie de calcul, au choix de l'appelant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategieDeterminant {
    /// Développement par cofacteurs (privilégié pour n ≤ 3).
    Cofacteurs,
    /// Élimination vers l'avant avec pivot partiel (toute taille).
    Elimination,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultatDeterminant {
    pub determinant: f64,
    pub demarche: Demarche,
}

/// Déterminant avec aiguillage automatique selon la taille :
/// formule fermée en 2×2, cofacteurs première ligne en 3×3,
/// élimination au-delà.
pub fn determinant(m: &Matrice) -> ResultatDeterminant {
    match m.taille() {
        2 => det_2x2_etapes(m),
        3 => det_3x3_cofacteurs(m),
        _ => elimination_etapes(m),
    }
}

/// Déterminant par la stratégie demandée.
pub fn determinant_par(m: &Matrice, strategie: StrategieDeterminant) -> ResultatDeterminant {
    match strategie {
        StrategieDeterminant::Elimination => elimination_etapes(m),
        StrategieDeterminant::Cofacteurs => match m.taille() {
            2 => det_2x2_etapes(m),
            3 => det_3x3_cofacteurs(m),
            _ => developpement_ligne(m, 0),
        },
    }
}

/// Développement par cofacteurs le long d'une ligne au choix.
pub fn developpement_cofacteurs(
    m: &Matrice,
    ligne: usize,
) -> Result<ResultatDeterminant, ErreurMatrice> {
    if ligne >= m.taille() {
        return Err(ErreurMatrice::LigneHorsBornes {
            ligne,
            taille: m.taille(),
        });
    }
    Ok(developpement_ligne(m, ligne))
}

/* ------------------------ Pivot partagé ------------------------ */

/// Première ligne à partir de `depuis` dont l'entrée en `colonne` n'est
/// pas négligeable. Une seule logique de pivot pour l'élimination du
/// déterminant ET pour Gauss-Jordan : les deux ne peuvent pas dériver.
pub(crate) fn cherche_pivot(grille: &[Vec<f64>], colonne: usize, depuis: usize) -> Option<usize> {
    (depuis..grille.len()).find(|&r| grille[r][colonne].abs() >= EPSILON_PIVOT)
}

/* ------------------------ Formes fermées ------------------------ */

fn det_2x2_etapes(m: &Matrice) -> ResultatDeterminant {
    let det = m.det_2x2();
    let mut demarche = Demarche::nouvelle();
    demarche.ajouter(Etape {
        titre: "Déterminant 2×2".into(),
        description: Some("On utilise la formule det(A) = a·d - b·c.".into()),
        math: Some(format!(
            "A = {}, det(A) = ({})({}) - ({})({}) = {}",
            m.format_plate(),
            format_valeur(m[(0, 0)]),
            format_valeur(m[(1, 1)]),
            format_valeur(m[(0, 1)]),
            format_valeur(m[(1, 0)]),
            format_valeur(det),
        )),
        instantane: Some(m.clone()),
    });
    ResultatDeterminant {
        determinant: det,
        demarche,
    }
}

fn det_3x3_cofacteurs(m: &Matrice) -> ResultatDeterminant {
    let mineurs = [m.mineur(0, 0), m.mineur(0, 1), m.mineur(0, 2)];
    let dets = [
        mineurs[0].det_2x2(),
        mineurs[1].det_2x2(),
        mineurs[2].det_2x2(),
    ];
    let cofacteurs = [dets[0], -dets[1], dets[2]];
    let det = m[(0, 0)] * cofacteurs[0] + m[(0, 1)] * cofacteurs[1] + m[(0, 2)] * cofacteurs[2];

    let mut demarche = Demarche::nouvelle();
    demarche.ajouter(Etape {
        titre: "Formule 3×3 par la première ligne".into(),
        description: Some(
            "det(A) = a₁₁C₁₁ + a₁₂C₁₂ + a₁₃C₁₃, avec C₁ⱼ = (-1)^(1+j)·det(M₁ⱼ).".into(),
        ),
        math: Some(format!("A = {}", m.format_plate())),
        instantane: Some(m.clone()),
    });

    let signes = ["+", "-", "+"];
    let notes = ["", " (signe négatif)", " (signe positif)"];
    for j in 0..3 {
        demarche.ajouter(Etape {
            titre: format!("Mineur et cofacteur C{}{}", sous(1), sous(j + 1)),
            description: Some(format!(
                "On supprime la ligne 1 et la colonne {}{}.",
                j + 1,
                notes[j]
            )),
            math: Some(format!(
                "M{lj} = {}, C{lj} = {}det(M{lj}) = {}",
                mineurs[j].format_plate(),
                signes[j],
                format_valeur(cofacteurs[j]),
                lj = format!("{}{}", sous(1), sous(j + 1)),
            )),
            instantane: Some(mineurs[j].clone()),
        });
    }

    demarche.ajouter(Etape {
        titre: "Somme finale".into(),
        description: Some("On substitue dans la formule.".into()),
        math: Some(format!(
            "det(A) = ({})({}) + ({})({}) + ({})({}) = {}",
            format_valeur(m[(0, 0)]),
            format_valeur(cofacteurs[0]),
            format_valeur(m[(0, 1)]),
            format_valeur(cofacteurs[1]),
            format_valeur(m[(0, 2)]),
            format_valeur(cofacteurs[2]),
            format_valeur(det),
        )),
        instantane: Some(m.clone()),
    });

    ResultatDeterminant {
        determinant: det,
        demarche,
    }
}

/* ------------------------ Développement général ------------------------ */

/// Valeur du déterminant d'un mineur, par aiguillage de taille explicite
/// (pas de récursion aveugle) : 1×1 direct, 2×2 primitive, 3×3 forme
/// fermée, élimination au-delà (la démarche intermédiaire est ignorée).
fn valeur_mineur(m: &Matrice) -> f64 {
    match m.taille() {
        1 => m.lignes()[0][0],
        2 => m.det_2x2(),
        3 => det_3x3_cofacteurs(m).determinant,
        _ => elimination_etapes(m).determinant,
    }
}

fn developpement_ligne(m: &Matrice, ligne: usize) -> ResultatDeterminant {
    let n = m.taille();
    let r = sous(ligne + 1);
    let mut det = 0.0;

    let mut demarche = Demarche::nouvelle();
    demarche.ajouter(Etape {
        titre: format!("Développement par cofacteurs (ligne {})", ligne + 1),
        description: Some(format!("det(A) = Σ a{r}ⱼ·C{r}ⱼ (somme sur j).")),
        math: Some(format!("A = {}", m.format_plate())),
        instantane: Some(m.clone()),
    });

    for j in 0..n {
        let mineur = m.mineur(ligne, j);
        let signe = if (ligne + j) % 2 == 0 { 1.0 } else { -1.0 };
        let det_mineur = valeur_mineur(&mineur);
        let cofacteur = signe * det_mineur;
        let terme = m[(ligne, j)] * cofacteur;
        det += terme;

        let c = sous(j + 1);
        demarche.ajouter(Etape {
            titre: format!("Cofacteur C{r}{c}"),
            description: Some(format!(
                "C{r}{c} = (-1)^({}+{})·det(M{r}{c}).",
                ligne + 1,
                j + 1
            )),
            math: Some(format!(
                "M{r}{c} = {}, C{r}{c} = {}·{} = {}",
                mineur.format_plate(),
                format_valeur(signe),
                format_valeur(det_mineur),
                format_valeur(cofacteur),
            )),
            instantane: Some(mineur),
        });
        demarche.ajouter(Etape {
            titre: format!("Terme a{r}{c}·C{r}{c}"),
            description: Some("On multiplie le coefficient par son cofacteur.".into()),
            math: Some(format!(
                "a{r}{c}·C{r}{c} = ({})({}) = {}",
                format_valeur(m[(ligne, j)]),
                format_valeur(cofacteur),
                format_valeur(terme),
            )),
            instantane: Some(m.clone()),
        });
    }

    demarche.ajouter(Etape {
        titre: "Somme finale".into(),
        description: Some("On additionne tous les termes.".into()),
        math: Some(format!("det(A) = {}", format_valeur(det))),
        instantane: Some(m.clone()),
    });

    ResultatDeterminant {
        determinant: det,
        demarche,
    }
}

/* ------------------------ Élimination à pivots ------------------------ */

fn elimination_etapes(a: &Matrice) -> ResultatDeterminant {
    let n = a.taille();
    let mut grille: Vec<Vec<f64>> = a.lignes().to_vec();
    let mut det = 1.0;

    let mut demarche = Demarche::nouvelle();
    demarche.ajouter(Etape {
        titre: "Déterminant par élimination".into(),
        description: Some(
            "On triangule A par élimination vers l'avant. Le déterminant est le produit \
             des pivots (signe inversé à chaque échange de lignes)."
                .into(),
        ),
        math: Some(format!("Au départ det(A) = 1, A = {}", a.format_plate())),
        instantane: Some(a.clone()),
    });

    for i in 0..n {
        if grille[i][i].abs() < EPSILON_PIVOT {
            match cherche_pivot(&grille, i, i + 1) {
                None => {
                    // Colonne morte : la matrice est singulière, on s'arrête là.
                    demarche.ajouter(Etape {
                        titre: format!("Pivot nul en colonne {}", i + 1),
                        description: Some("Aucune ligne à échanger ⇒ det(A) = 0.".into()),
                        math: Some("det(A) = 0".into()),
                        instantane: Some(Matrice::depuis_lignes(grille.clone())),
                    });
                    return ResultatDeterminant {
                        determinant: 0.0,
                        demarche,
                    };
                }
                Some(sw) => {
                    grille.swap(i, sw);
                    det = -det;
                    demarche.ajouter(Etape {
                        titre: format!("Échange R{} ↔ R{}", sous(i + 1), sous(sw + 1)),
                        description: Some("Le signe de det change.".into()),
                        math: Some("det ← -det".into()),
                        instantane: Some(Matrice::depuis_lignes(grille.clone())),
                    });
                }
            }
        }

        let p = grille[i][i];
        det *= p;
        demarche.ajouter(Etape {
            titre: format!("Pivot {}", i + 1),
            description: Some(format!("On prend p = A{}{}.", sous(i + 1), sous(i + 1))),
            math: Some(format!("p = {}, det ← det·p", format_valeur(p))),
            instantane: Some(Matrice::depuis_lignes(grille.clone())),
        });

        for r in (i + 1)..n {
            let f = grille[r][i] / p;
            if f.abs() < EPSILON_PIVOT {
                continue;
            }
            for c in i..n {
                grille[r][c] -= f * grille[i][c];
            }
            demarche.ajouter(Etape {
                titre: format!("Élimination en R{}", sous(r + 1)),
                description: Some(format!(
                    "R{} ← R{} - {}·R{}",
                    sous(r + 1),
                    sous(r + 1),
                    format_valeur(f),
                    sous(i + 1)
                )),
                math: None,
                instantane: Some(Matrice::depuis_lignes(grille.clone())),
            });
        }
    }

    demarche.ajouter(Etape {
        titre: "Produit des pivots".into(),
        description: Some("Matrice triangulaire ⇒ produit des pivots.".into()),
        math: Some(format!("det(A) = {}", format_valeur(det))),
        instantane: Some(Matrice::depuis_lignes(grille)),
    });

    ResultatDeterminant {
        determinant: det,
        demarche,
    }
}
