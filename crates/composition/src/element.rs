//! Periodic Table Elements

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

macro_rules! periodic_table {
    ($($el:ident),+ $(,)?) => {
        /// Chemical element, H through Og
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Element {
            $($el),+
        }

        impl Element {
            /// Every element in atomic-number order
            pub const ALL: [Element; 118] = [$(Element::$el),+];

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Element::$el => stringify!($el)),+
                }
            }
        }
    };
}

periodic_table![
    H, He, Li, Be, B, C, N, O, F, Ne,
    Na, Mg, Al, Si, P, S, Cl, Ar, K, Ca,
    Sc, Ti, V, Cr, Mn, Fe, Co, Ni, Cu, Zn,
    Ga, Ge, As, Se, Br, Kr, Rb, Sr, Y, Zr,
    Nb, Mo, Tc, Ru, Rh, Pd, Ag, Cd, In, Sn,
    Sb, Te, I, Xe, Cs, Ba, La, Ce, Pr, Nd,
    Pm, Sm, Eu, Gd, Tb, Dy, Ho, Er, Tm, Yb,
    Lu, Hf, Ta, W, Re, Os, Ir, Pt, Au, Hg,
    Tl, Pb, Bi, Po, At, Rn, Fr, Ra, Ac, Th,
    Pa, U, Np, Pu, Am, Cm, Bk, Cf, Es, Fm,
    Md, No, Lr, Rf, Db, Sg, Bh, Hs, Mt, Ds,
    Rg, Cn, Nh, Fl, Mc, Lv, Ts, Og,
];

impl Element {
    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Look up an element by atomic number (1-based)
    pub fn from_atomic_number(z: u8) -> Option<Element> {
        z.checked_sub(1)
            .and_then(|idx| Self::ALL.get(usize::from(idx)))
            .copied()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|el| el.symbol() == s)
            .copied()
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}
