/// Failure of the geometric solvers.
///
/// Every variant is a deterministic function of the inputs, retrying with the
/// same values gives the same error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The target is out of reach of an actuator chain.
    InfeasibleTarget {
        /// Chain index, `1` for `l1-l3` and `2` for `l2-l4`
        chain: u8,
        /// Distance from the ground anchor to the target
        dist: f64,
    },
    /// The passive links cannot bridge the actuator joints.
    InfeasibleAssembly {
        /// Distance between the actuator joints
        dist: f64,
    },
    /// A direction is required from a zero-length segment.
    DegenerateSegment,
    /// Unknown orientation name.
    InvalidOrient(String),
    /// The linkage parameters break an invariant.
    InvalidLinkage(&'static str),
    /// Servo angle in degrees out of the servo range.
    ServoRange {
        /// Requested servo angle
        deg: f64,
    },
    /// Unknown leg side name.
    InvalidSide(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InfeasibleTarget { chain, dist } => {
                write!(f, "infeasible target: chain {chain} cannot reach distance {dist:.04}")
            }
            Self::InfeasibleAssembly { dist } => {
                write!(f, "infeasible assembly: joints are {dist:.04} apart")
            }
            Self::DegenerateSegment => write!(f, "degenerate segment"),
            Self::InvalidOrient(s) => write!(
                f,
                "invalid orientation \"{s}\", expected one of: in-in, in-out, out-in, out-out"
            ),
            Self::InvalidLinkage(s) => write!(f, "invalid linkage: {s}"),
            Self::ServoRange { deg } => write!(f, "servo angle {deg:.2}° is out of range"),
            Self::InvalidSide(s) => write!(f, "invalid side \"{s}\", expected left or right"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Check if the error comes from a reachability test.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::InfeasibleTarget { .. } | Self::InfeasibleAssembly { .. }
        )
    }
}
