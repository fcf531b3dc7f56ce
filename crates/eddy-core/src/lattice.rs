//! Discrete velocity sets (lattice descriptors).
//!
//! A [`VelocitySet`] is an immutable table of integer velocities, weights,
//! and the opposite-direction map. Velocities always carry three
//! components; 2D sets keep the last one at zero so that geometry code
//! can index axes uniformly.
//!
//! Populations are stored offset by their weight, so that the sum of the
//! stored values is the reduced density `rho_bar = rho - 1`.

use crate::error::LatticeError;
use crate::id::Flux;

/// An immutable discrete velocity set.
///
/// The built-in sets are [`D2Q5`], [`D3Q7`], and [`D2Q9`]. Custom sets can
/// be declared as `static` items through [`VelocitySet::new`] and checked
/// with [`validate()`](VelocitySet::validate).
#[derive(Debug, PartialEq)]
pub struct VelocitySet {
    name: &'static str,
    d: usize,
    c: &'static [[i32; 3]],
    t: &'static [f64],
    opposite: &'static [usize],
    inv_cs2: f64,
}

impl VelocitySet {
    /// Declare a velocity set from its raw tables.
    ///
    /// No checks are performed here; call [`validate()`](Self::validate)
    /// before handing a custom set to a boundary.
    pub const fn new(
        name: &'static str,
        d: usize,
        c: &'static [[i32; 3]],
        t: &'static [f64],
        opposite: &'static [usize],
        inv_cs2: f64,
    ) -> Self {
        Self {
            name,
            d,
            c,
            t,
            opposite,
            inv_cs2,
        }
    }

    /// Descriptor name, e.g. `"D2Q5"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Spatial dimension.
    #[inline]
    pub fn d(&self) -> usize {
        self.d
    }

    /// Number of populations.
    #[inline]
    pub fn q(&self) -> usize {
        self.c.len()
    }

    /// Velocity of population `i`.
    #[inline]
    pub fn c(&self, i: usize) -> [i32; 3] {
        self.c[i]
    }

    /// Weight of population `i`.
    #[inline]
    pub fn t(&self, i: usize) -> f64 {
        self.t[i]
    }

    /// Index of the population travelling in the opposite direction.
    #[inline]
    pub fn opposite(&self, i: usize) -> usize {
        self.opposite[i]
    }

    /// Inverse squared lattice sound speed.
    #[inline]
    pub fn inv_cs2(&self) -> f64 {
        self.inv_cs2
    }

    /// Convert a physical density to the reduced (offset) density.
    #[inline]
    pub fn rho_bar(&self, rho: f64) -> f64 {
        rho - 1.0
    }

    /// Convert a reduced density back to the physical density.
    #[inline]
    pub fn full_rho(&self, rho_bar: f64) -> f64 {
        rho_bar + 1.0
    }

    /// Equilibrium flux `full_rho(rho_bar) * u`. Components past `d` are zero.
    #[inline]
    pub fn equilibrium_flux(&self, rho_bar: f64, u: &Flux) -> Flux {
        let rho = self.full_rho(rho_bar);
        let mut j = [0.0; 3];
        for a in 0..self.d {
            j[a] = rho * u[a];
        }
        j
    }

    /// Number of non-zero components of `c[i]`.
    pub fn nonzero_components(&self, i: usize) -> usize {
        self.c[i][..self.d].iter().filter(|&&ci| ci != 0).count()
    }

    /// `c[i] · v` over the lattice dimension.
    #[inline]
    pub fn dot(&self, i: usize, v: &Flux) -> f64 {
        let ci = &self.c[i];
        (0..self.d).map(|a| ci[a] as f64 * v[a]).sum()
    }

    /// Check the structural invariants of the tables.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: dimension in {2, 3}, equal
    /// table lengths, no component beyond `d`, `c[i] == -c[opposite(i)]`,
    /// and weights summing to one.
    pub fn validate(&self) -> Result<(), LatticeError> {
        if !(2..=3).contains(&self.d) {
            return Err(LatticeError::UnsupportedDimension { d: self.d });
        }
        let q = self.c.len();
        if self.t.len() != q || self.opposite.len() != q {
            return Err(LatticeError::TableLengthMismatch {
                velocities: q,
                weights: self.t.len(),
                opposites: self.opposite.len(),
            });
        }
        for i in 0..q {
            if self.c[i][self.d..].iter().any(|&ci| ci != 0) {
                return Err(LatticeError::ComponentBeyondDimension { index: i });
            }
            let opp = self.opposite[i];
            let negates = opp < q && (0..3).all(|a| self.c[i][a] == -self.c[opp][a]);
            if !negates {
                return Err(LatticeError::BrokenOpposite {
                    index: i,
                    opposite: opp,
                });
            }
        }
        let sum: f64 = self.t.iter().sum();
        if (sum - 1.0).abs() > 1e-12 {
            return Err(LatticeError::WeightSum {
                sum: format!("{sum}"),
            });
        }
        Ok(())
    }
}

/// D2Q5 scalar-transport set.
pub static D2Q5: VelocitySet = VelocitySet::new(
    "D2Q5",
    2,
    &[[0, 0, 0], [-1, 0, 0], [0, -1, 0], [1, 0, 0], [0, 1, 0]],
    &[1.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0],
    &[0, 3, 4, 1, 2],
    3.0,
);

/// D3Q7 scalar-transport set.
pub static D3Q7: VelocitySet = VelocitySet::new(
    "D3Q7",
    3,
    &[
        [0, 0, 0],
        [-1, 0, 0],
        [0, -1, 0],
        [0, 0, -1],
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 1],
    ],
    &[
        1.0 / 4.0,
        1.0 / 8.0,
        1.0 / 8.0,
        1.0 / 8.0,
        1.0 / 8.0,
        1.0 / 8.0,
        1.0 / 8.0,
    ],
    &[0, 4, 5, 6, 1, 2, 3],
    4.0,
);

/// D2Q9 set.
///
/// ```text
///   1   8   7
///    \  |  /
///   2 - 0 - 6
///    /  |  \
///   3   4   5
/// ```
pub static D2Q9: VelocitySet = VelocitySet::new(
    "D2Q9",
    2,
    &[
        [0, 0, 0],
        [-1, 1, 0],
        [-1, 0, 0],
        [-1, -1, 0],
        [0, -1, 0],
        [1, -1, 0],
        [1, 0, 0],
        [1, 1, 0],
        [0, 1, 0],
    ],
    &[
        4.0 / 9.0,
        1.0 / 36.0,
        1.0 / 9.0,
        1.0 / 36.0,
        1.0 / 9.0,
        1.0 / 36.0,
        1.0 / 9.0,
        1.0 / 36.0,
        1.0 / 9.0,
    ],
    &[0, 5, 6, 7, 8, 1, 2, 3, 4],
    3.0,
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builtin_sets_validate() {
        for set in [&D2Q5, &D3Q7, &D2Q9] {
            assert_eq!(set.validate(), Ok(()), "{} failed", set.name());
        }
    }

    #[test]
    fn dimensions_and_counts() {
        assert_eq!((D2Q5.d(), D2Q5.q()), (2, 5));
        assert_eq!((D3Q7.d(), D3Q7.q()), (3, 7));
        assert_eq!((D2Q9.d(), D2Q9.q()), (2, 9));
    }

    #[test]
    fn second_moment_is_isotropic() {
        // sum_i t_i c_ia c_ib = cs2 * delta_ab
        for set in [&D2Q5, &D3Q7, &D2Q9] {
            let cs2 = 1.0 / set.inv_cs2();
            for a in 0..set.d() {
                for b in 0..set.d() {
                    let m: f64 = (0..set.q())
                        .map(|i| set.t(i) * (set.c(i)[a] * set.c(i)[b]) as f64)
                        .sum();
                    let expected = if a == b { cs2 } else { 0.0 };
                    assert!((m - expected).abs() < 1e-14, "{} ({a},{b}): {m}", set.name());
                }
            }
        }
    }

    #[test]
    fn rest_population_is_its_own_opposite() {
        assert_eq!(D2Q5.opposite(0), 0);
        assert_eq!(D3Q7.opposite(0), 0);
        assert_eq!(D2Q9.nonzero_components(0), 0);
    }

    #[test]
    fn nonzero_components_counts_diagonals() {
        assert_eq!(D2Q9.nonzero_components(1), 2);
        assert_eq!(D2Q9.nonzero_components(2), 1);
        assert_eq!(D3Q7.nonzero_components(6), 1);
    }

    #[test]
    fn validate_rejects_broken_opposite() {
        static BAD: VelocitySet = VelocitySet::new(
            "bad",
            2,
            &[[0, 0, 0], [1, 0, 0], [-1, 0, 0]],
            &[0.5, 0.25, 0.25],
            &[0, 1, 1],
            3.0,
        );
        assert_eq!(
            BAD.validate(),
            Err(LatticeError::BrokenOpposite {
                index: 1,
                opposite: 1
            })
        );
    }

    #[test]
    fn validate_rejects_bad_weights_and_lengths() {
        static SHORT: VelocitySet =
            VelocitySet::new("short", 2, &[[0, 0, 0], [1, 0, 0]], &[1.0], &[0, 1], 3.0);
        assert!(matches!(
            SHORT.validate(),
            Err(LatticeError::TableLengthMismatch { .. })
        ));

        static HEAVY: VelocitySet = VelocitySet::new(
            "heavy",
            2,
            &[[0, 0, 0], [1, 0, 0], [-1, 0, 0]],
            &[0.5, 0.5, 0.5],
            &[0, 2, 1],
            3.0,
        );
        assert!(matches!(HEAVY.validate(), Err(LatticeError::WeightSum { .. })));

        static FLAT: VelocitySet = VelocitySet::new(
            "flat",
            2,
            &[[0, 0, 0], [0, 0, 1], [0, 0, -1]],
            &[0.5, 0.25, 0.25],
            &[0, 2, 1],
            3.0,
        );
        assert_eq!(
            FLAT.validate(),
            Err(LatticeError::ComponentBeyondDimension { index: 1 })
        );
    }

    #[test]
    fn equilibrium_flux_scales_velocity_by_full_density() {
        let j = D2Q5.equilibrium_flux(1.0, &[0.1, 0.2, 0.7]);
        assert_eq!(j, [0.2, 0.4, 0.0]);
    }

    proptest! {
        #[test]
        fn rho_bar_round_trips(rho in -1.0e6f64..1.0e6) {
            let back = D3Q7.full_rho(D3Q7.rho_bar(rho));
            prop_assert!((back - rho).abs() <= 1e-9 * rho.abs().max(1.0));
        }
    }
}
