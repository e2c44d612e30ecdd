// src/noyau/fraction.rs
//
// Approximation rationnelle par fractions continues (affichage EXACT).
// - vers_fraction    : meilleur p/q sous borne de dénominateur
// - format_fraction  : règle d'affichage n/d (d = 1 => entier nu)
// - format_valeur    : commodité d'affichage aux bornes par défaut
//
// Tout est fonction pure : (valeur, den_max, eps) explicites, aucun état.

use num_rational::Rational64;
use num_traits::One;

/// Borne de dénominateur par défaut pour l'affichage des étapes.
pub const DENOMINATEUR_MAX: i64 = 2000;

/// Tolérance d'arrêt de l'expansion en fractions continues.
pub const EPSILON_FRACTION: f64 = 1e-10;

/// Meilleure approximation rationnelle de `x` avec dénominateur ≤ `den_max`.
///
/// Expansion en fractions continues, récurrence standard
/// (h₋₁ = 1, h₋₂ = 0, k₋₁ = 0, k₋₂ = 1) : à chaque étape a = ⌊b⌋,
/// h ← a·h₁ + h₀, k ← a·k₁ + k₀ ; arrêt quand le dénominateur suivant
/// dépasserait `den_max` ou quand le reste fractionnaire passe sous `eps`
/// (sinon b ← 1/(b − a)). Le signe est porté à part puis replié dans le
/// numérateur ; le résultat est réduit, dénominateur > 0.
///
/// Retourne None si `x` n'est pas fini ou si le numérateur ne tient pas
/// dans un i64 — jamais de panique.
pub fn vers_fraction(x: f64, den_max: i64, eps: f64) -> Option<Rational64> {
    if !x.is_finite() {
        return None;
    }

    let signe: i128 = if x < 0.0 { -1 } else { 1 };
    let mut b = x.abs();

    // Convergents h/k en i128 : les intermédiaires peuvent déborder un i64
    // avant que la borne sur k ne coupe la boucle.
    let (mut h1, mut h0): (i128, i128) = (1, 0);
    let (mut k1, mut k0): (i128, i128) = (0, 1);

    loop {
        let a = b.floor();
        if a > i64::MAX as f64 {
            return None;
        }
        let a = a as i128;

        let h2 = a * h1 + h0;
        let k2 = a * k1 + k0;
        if k2 > den_max as i128 {
            break;
        }
        h0 = h1;
        h1 = h2;
        k0 = k1;
        k1 = k2;

        let reste = b - (a as f64);
        if reste < eps {
            break;
        }
        b = 1.0 / reste;
    }

    let num = i64::try_from(signe * h1).ok()?;
    let den = i64::try_from(if k1 == 0 { 1 } else { k1 }).ok()?;

    // Rational64::new réduit par pgcd et garde le dénominateur positif.
    Some(Rational64::new(num, den))
}

/// Règle d'affichage : dénominateur 1 => entier nu, sinon n/d
/// (signe replié dans le numérateur, dénominateur toujours positif).
pub fn format_fraction(r: &Rational64) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Affichage d'une valeur dans la démarche : fraction si possible,
/// sinon la valeur flottante telle quelle (NaN et ±inf passent inchangés).
pub fn format_valeur(v: f64) -> String {
    match vers_fraction(v, DENOMINATEUR_MAX, EPSILON_FRACTION) {
        Some(r) => format_fraction(&r),
        None => format!("{v}"),
    }
}
