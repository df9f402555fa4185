use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Image orientation (patient) direction cosines
///
/// Six values: the row direction `(x1, y1, z1)` followed by the column
/// direction `(x2, y2, z2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationVector {
    pub values: [f64; 6],
}

impl OrientationVector {
    /// Creates a new OrientationVector
    pub fn new(values: [f64; 6]) -> Self {
        Self { values }
    }

    /// Parses direction cosines from string
    ///
    /// Accepts formats like:
    /// - "[1, 0, 0, 0, 0, -1]"
    /// - "1\\0\\0\\0\\0\\-1"
    /// - Exponential notation: "9.9e-1\\1.2e-3\\..."
    ///
    /// # Errors
    ///
    /// Returns an error unless the string splits into exactly six tokens
    /// that are each a finite decimal number
    pub fn parse(s: &str) -> Result<Self, String> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?$")
                .expect("Failed to compile regex")
        });

        let s = s.trim();
        let tokens: Vec<&str> = match s.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            Some(inner) => inner.split(',').collect(),
            None => s.split('\\').collect(),
        };

        let numbers = tokens
            .iter()
            .map(|token| {
                let token = token.trim();
                if !re.is_match(token) {
                    return Err(format!("Invalid direction cosine '{}' in '{}'", token, s));
                }
                token
                    .parse::<f64>()
                    .map_err(|e| format!("Failed to parse '{}': {}", token, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let values: [f64; 6] = numbers.try_into().map_err(|v: Vec<f64>| {
            format!(
                "Expected 6 direction cosines in '{}', found {}",
                s,
                v.len()
            )
        })?;

        Ok(Self { values })
    }

    /// Returns the rounded `[x1, y1, x2, y2]` signature
    ///
    /// The z components are dropped. Halves round to even.
    pub fn signature(&self) -> [i64; 4] {
        let r = |i: usize| self.values[i].round_ties_even() as i64;
        [r(0), r(1), r(3), r(4)]
    }
}

impl fmt::Display for OrientationVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
