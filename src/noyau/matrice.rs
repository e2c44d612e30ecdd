// src/noyau/matrice.rs
//
// Matrice réelle (grille f64, ligne-major) + opérations structurelles :
// - carree()        : constructeur validé (entrée de l'appelant)
// - depuis_lignes() : grilles internes (mineurs, augmentées, instantanés)
// - mineur / det_2x2 / transposee / identite / produit
// - format_plate / format_augmentee : rendu une-ligne, valeurs en fractions
//
// Contrat : les moteurs reçoivent une Matrice déjà validée et travaillent
// toujours sur des copies — jamais de mutation de la matrice de l'appelant.

use std::ops::Index;

use super::erreur::ErreurMatrice;
use super::fraction::format_valeur;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrice {
    lignes: Vec<Vec<f64>>,
}

impl Matrice {
    /// Constructeur validé pour l'entrée de l'appelant : non vide, n ≥ 2,
    /// carrée, toutes les entrées finies. Toute violation est signalée
    /// avant la moindre étape, en nommant la cellule ou la ligne fautive.
    pub fn carree(lignes: Vec<Vec<f64>>) -> Result<Self, ErreurMatrice> {
        if lignes.is_empty() {
            return Err(ErreurMatrice::Vide);
        }
        let n = lignes.len();
        if n < 2 {
            return Err(ErreurMatrice::TropPetite { n });
        }
        for (i, ligne) in lignes.iter().enumerate() {
            if ligne.len() != n {
                return Err(ErreurMatrice::NonCarree {
                    ligne: i,
                    obtenu: ligne.len(),
                    attendu: n,
                });
            }
        }
        for (i, ligne) in lignes.iter().enumerate() {
            for (j, &v) in ligne.iter().enumerate() {
                if !v.is_finite() {
                    return Err(ErreurMatrice::EntreeNonFinie {
                        ligne: i,
                        colonne: j,
                        valeur: v,
                    });
                }
            }
        }
        Ok(Self { lignes })
    }

    /// Grille sans validation : mineurs, matrices augmentées, instantanés.
    pub fn depuis_lignes(lignes: Vec<Vec<f64>>) -> Self {
        Self { lignes }
    }

    /// Nombre de lignes.
    pub fn taille(&self) -> usize {
        self.lignes.len()
    }

    pub fn lignes(&self) -> &[Vec<f64>] {
        &self.lignes
    }

    /// Mineur M(i, j) : suppression de la ligne i et de la colonne j.
    /// Ne modifie jamais `self`.
    pub fn mineur(&self, i: usize, j: usize) -> Matrice {
        let lignes = self
            .lignes
            .iter()
            .enumerate()
            .filter(|(r, _)| *r != i)
            .map(|(_, ligne)| {
                ligne
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| *c != j)
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect();
        Matrice { lignes }
    }

    /// det(A) = a·d - b·c pour une 2×2. Primitive sans démarche.
    pub fn det_2x2(&self) -> f64 {
        debug_assert_eq!(self.taille(), 2);
        self.lignes[0][0] * self.lignes[1][1] - self.lignes[0][1] * self.lignes[1][0]
    }

    /// Transposée (adj(A) = Cᵀ).
    pub fn transposee(&self) -> Matrice {
        let n = self.lignes.len();
        let p = self.lignes[0].len();
        let lignes = (0..p)
            .map(|j| (0..n).map(|i| self.lignes[i][j]).collect())
            .collect();
        Matrice { lignes }
    }

    pub fn identite(n: usize) -> Matrice {
        let lignes = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Matrice { lignes }
    }

    /// Produit matriciel (dimensions supposées compatibles).
    pub fn produit(&self, autre: &Matrice) -> Matrice {
        debug_assert_eq!(self.lignes[0].len(), autre.taille());
        let p = autre.lignes[0].len();
        let lignes = self
            .lignes
            .iter()
            .map(|ligne| {
                (0..p)
                    .map(|j| {
                        ligne
                            .iter()
                            .zip(&autre.lignes)
                            .map(|(&a, l)| a * l[j])
                            .sum()
                    })
                    .collect()
            })
            .collect();
        Matrice { lignes }
    }

    /// Rendu une-ligne : [a, b; c, d], chaque valeur en fraction.
    pub fn format_plate(&self) -> String {
        let corps = self
            .lignes
            .iter()
            .map(|l| {
                l.iter()
                    .map(|&v| format_valeur(v))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join("; ");
        format!("[{corps}]")
    }

    /// Rendu une-ligne d'une grille augmentée [A | B], bloc gauche de
    /// `n` colonnes : [a, b | 1, 0; c, d | 0, 1].
    pub fn format_augmentee(&self, n: usize) -> String {
        let corps = self
            .lignes
            .iter()
            .map(|l| {
                let gauche = l[..n]
                    .iter()
                    .map(|&v| format_valeur(v))
                    .collect::<Vec<_>>()
                    .join(", ");
                let droite = l[n..]
                    .iter()
                    .map(|&v| format_valeur(v))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{gauche} | {droite}")
            })
            .collect::<Vec<_>>()
            .join("; ");
        format!("[{corps}]")
    }
}

impl Index<(usize, usize)> for Matrice {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.lignes[i][j]
    }
}
