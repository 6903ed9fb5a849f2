use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How samples outside the grid are extended.
///
/// For a row `a b c d`:
///
/// | mode     | extension                     |
/// |----------|-------------------------------|
/// | constant | `k k k \| a b c d \| k k k`   |
/// | nearest  | `a a a \| a b c d \| d d d`   |
/// | reflect  | `c b a \| a b c d \| d c b`   |
/// | mirror   | `d c b \| a b c d \| c b a`   |
/// | wrap     | `b c d \| a b c d \| a b c`   |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "cval")]
pub enum BoundaryMode {
    Constant(f32),
    Nearest,
    Reflect,
    Mirror,
    Wrap,
}

impl Default for BoundaryMode {
    fn default() -> Self {
        BoundaryMode::Constant(0.0)
    }
}

impl BoundaryMode {
    /// Maps a possibly out-of-range `index` on an axis of length `len` to an
    /// in-range index. `None` means the constant value is read instead.
    pub fn resolve(&self, index: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if index >= 0 && (index as usize) < len {
            return Some(index as usize);
        }

        let n = len as isize;
        let resolved = match self {
            BoundaryMode::Constant(_) => return None,
            BoundaryMode::Nearest => index.clamp(0, n - 1),
            BoundaryMode::Wrap => index.rem_euclid(n),
            BoundaryMode::Reflect => {
                let i = index.rem_euclid(2 * n);
                if i >= n {
                    2 * n - 1 - i
                } else {
                    i
                }
            }
            BoundaryMode::Mirror => {
                if n == 1 {
                    0
                } else {
                    let period = 2 * n - 2;
                    let i = index.rem_euclid(period);
                    if i >= n {
                        period - i
                    } else {
                        i
                    }
                }
            }
        };
        Some(resolved as usize)
    }

    /// Value read for samples that resolve to nothing
    pub fn cval(&self) -> f32 {
        match self {
            BoundaryMode::Constant(cval) => *cval,
            _ => 0.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoundaryMode::Constant(_) => "constant",
            BoundaryMode::Nearest => "nearest",
            BoundaryMode::Reflect => "reflect",
            BoundaryMode::Mirror => "mirror",
            BoundaryMode::Wrap => "wrap",
        }
    }

    /// Parses a mode name, using `cval` for constant mode
    pub fn parse_with_cval(name: &str, cval: f32) -> Result<Self, String> {
        match name.parse::<BoundaryMode>()? {
            BoundaryMode::Constant(_) => Ok(BoundaryMode::Constant(cval)),
            mode => Ok(mode),
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryMode::Constant(cval) => write!(f, "constant({})", cval),
            mode => f.write_str(mode.name()),
        }
    }
}

impl FromStr for BoundaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constant" => Ok(BoundaryMode::Constant(0.0)),
            "nearest" => Ok(BoundaryMode::Nearest),
            "reflect" => Ok(BoundaryMode::Reflect),
            "mirror" => Ok(BoundaryMode::Mirror),
            "wrap" => Ok(BoundaryMode::Wrap),
            other => Err(format!(
                "unknown boundary mode '{}', expected constant, nearest, reflect, mirror or wrap",
                other
            )),
        }
    }
}
