//! The 2×2 Pauli matrices, identity and zero matrix used as building blocks
//! for single-particle Hamiltonians.

use ndarray as nd;
use num_complex::Complex64 as C64;

const O: C64 = C64::new(0.0, 0.0);
const R: C64 = C64::new(1.0, 0.0);
const I: C64 = C64::new(0.0, 1.0);
const NR: C64 = C64::new(-1.0, 0.0);
const NI: C64 = C64::new(0.0, -1.0);

/// Identity, σ<sub>0</sub>.
pub const S0: [[C64; 2]; 2] = [[ R,  O], [ O,  R]];

/// σ<sub>*x*</sub>.
pub const S1: [[C64; 2]; 2] = [[ O,  R], [ R,  O]];

/// σ<sub>*y*</sub>.
pub const S2: [[C64; 2]; 2] = [[ O, NI], [ I,  O]];

/// σ<sub>*z*</sub>.
pub const S3: [[C64; 2]; 2] = [[ R,  O], [ O, NR]];

/// The 2×2 zero matrix.
pub const Z2: [[C64; 2]; 2] = [[ O,  O], [ O,  O]];

/// Names for the entries of the constant table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pauli {
    S0,
    S1,
    S2,
    S3,
    Z2,
}

impl Pauli {
    /// Return the raw constant.
    pub fn elems(self) -> &'static [[C64; 2]; 2] {
        match self {
            Self::S0 => &S0,
            Self::S1 => &S1,
            Self::S2 => &S2,
            Self::S3 => &S3,
            Self::Z2 => &Z2,
        }
    }

    /// Return a freshly allocated array copy of the matrix.
    pub fn matrix(self) -> nd::Array2<C64> { nd::arr2(self.elems()) }

    /// Return `a * self` as an array.
    pub fn scaled<A>(self, a: A) -> nd::Array2<C64>
    where A: Into<C64>
    {
        let a: C64 = a.into();
        self.matrix().mapv(|x| a * x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn squares_are_identity() {
        let id = Pauli::S0.matrix();
        for p in [Pauli::S1, Pauli::S2, Pauli::S3] {
            let m = p.matrix();
            assert_eq!(m.dot(&m), id);
        }
    }

    #[test]
    fn product_rule() {
        // σx σy = i σz
        let xy = Pauli::S1.matrix().dot(&Pauli::S2.matrix());
        assert_eq!(xy, Pauli::S3.scaled(C64::i()));
        assert_eq!(Pauli::Z2.matrix(), nd::Array2::<C64>::zeros((2, 2)));
    }
}
