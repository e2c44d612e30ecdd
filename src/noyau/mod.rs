//! Noyau matriciel « démarche »
//!
//! Organisation interne :
//! - fraction.rs    : approximation rationnelle (fractions continues) + affichage n/d
//! - matrice.rs     : grille f64 validée + opérations structurelles (mineur, 2×2, produit)
//! - etapes.rs      : Etape / Demarche (trace ordonnée rendue à l'appelant)
//! - erreur.rs      : taxonomie (entrée invalide, pivot introuvable)
//! - determinant.rs : cofacteurs + élimination à pivots, chaque stratégie tracée
//! - inverse.rs     : formule 2×2, adjointe, Gauss-Jordan ; singularité = résultat

pub mod determinant;
pub mod erreur;
pub mod etapes;
pub mod fraction;
pub mod inverse;
pub mod matrice;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use determinant::{
    determinant, determinant_par, developpement_cofacteurs, ResultatDeterminant,
    StrategieDeterminant, EPSILON_PIVOT,
};
pub use erreur::ErreurMatrice;
pub use etapes::{Demarche, Etape};
pub use fraction::{
    format_fraction, format_valeur, vers_fraction, DENOMINATEUR_MAX, EPSILON_FRACTION,
};
pub use inverse::{inverse, inverse_par, Inversion, MethodeInverse, EPSILON_SINGULIER};
pub use matrice::Matrice;
