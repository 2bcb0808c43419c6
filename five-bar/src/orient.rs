use crate::Error;

/// Orientation of the two actuators.
///
/// Each mode selects the sign applied to the unsigned base angle of the
/// actuator, the first word for `l1` and the second word for `l2`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum Orient {
    /// Signs `(+, +)`
    #[default]
    InIn,
    /// Signs `(+, -)`
    InOut,
    /// Signs `(-, +)`
    OutIn,
    /// Signs `(-, -)`
    OutOut,
}

impl std::fmt::Display for Orient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Orient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::LIST
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| Error::InvalidOrient(s.to_string()))
    }
}

impl Orient {
    /// All orientations.
    pub const LIST: [Self; 4] = [Self::InIn, Self::InOut, Self::OutIn, Self::OutOut];

    /// Get the name used in the user interface.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InIn => "in-in",
            Self::InOut => "in-out",
            Self::OutIn => "out-in",
            Self::OutOut => "out-out",
        }
    }

    /// Sign pair `[s1, s2]` of the actuator angles.
    pub const fn signs(&self) -> [f64; 2] {
        match self {
            Self::InIn => [1., 1.],
            Self::InOut => [1., -1.],
            Self::OutIn => [-1., 1.],
            Self::OutOut => [-1., -1.],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for o in Orient::LIST {
            assert_eq!(o.name().parse::<Orient>(), Ok(o));
            assert_eq!(o.to_string(), o.name());
        }
    }

    #[test]
    fn parse_is_exact() {
        for s in ["IN-IN", "in_in", " in-in", "in-in ", "inin", ""] {
            assert_eq!(s.parse::<Orient>(), Err(Error::InvalidOrient(s.to_string())));
        }
    }

    #[test]
    fn sign_pairs_are_distinct() {
        let signs = Orient::LIST.map(|o| o.signs());
        for (i, a) in signs.iter().enumerate() {
            for b in &signs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
