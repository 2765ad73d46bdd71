use std::fmt;

use linalg::Matrix;

use crate::error::{QuantumError, Result};
use crate::gates;

/// Tolerance for the unitarity check applied when a gate is constructed.
pub const GATE_TOLERANCE: f64 = 1e-6;

/// Stable handle of a gate template stored in a [`crate::Toolbox`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateId(pub(crate) usize);

impl GateId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How an animated gate derives its matrix from the shared phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Animation {
    EvolvingX,
    EvolvingY,
    EvolvingZ,
    EvolvingH,
    /// Real rotation by the phase itself.
    Rotation,
}

impl Animation {
    /// The gate's unitary at phase `ts`. Depends on nothing but `ts`.
    pub fn matrix_at(self, ts: f64) -> Matrix {
        match self {
            Self::EvolvingX => gates::evolving_x(ts),
            Self::EvolvingY => gates::evolving_y(ts),
            Self::EvolvingZ => gates::evolving_z(ts),
            Self::EvolvingH => gates::evolving_h(ts),
            Self::Rotation => gates::real_rotation(ts),
        }
    }
}

/// A named single-wire operator template.
#[derive(Clone, Debug)]
pub struct Gate {
    symbol: String,
    name: String,
    description: String,
    matrix: Matrix,
    animation: Option<Animation>,
}

impl Gate {
    /// Creates a fixed gate, rejecting anything that is not a 2×2 unitary.
    pub fn new(
        symbol: impl Into<String>,
        matrix: Matrix,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let gate = Self::unchecked(symbol, matrix, name, description);
        gate.validate()?;
        Ok(gate)
    }

    /// Creates a gate without validating its matrix. Evolution still refuses
    /// matrices that are not 2×2.
    pub fn unchecked(
        symbol: impl Into<String>,
        matrix: Matrix,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            matrix,
            animation: None,
        }
    }

    /// Fixed gate rotating the Bloch sphere by `|(x, y, z)|` turns about `(x, y, z)`.
    pub fn from_rotation(
        symbol: impl Into<String>,
        (x, y, z): (f64, f64, f64),
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::unchecked(symbol, Matrix::from_rotation(x, y, z), name, description)
    }

    /// Gate whose matrix follows `animation`; starts at phase zero.
    pub fn animated(
        symbol: impl Into<String>,
        animation: Animation,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut gate = Self::unchecked(symbol, animation.matrix_at(0.0), name, description);
        gate.animation = Some(animation);
        gate
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The current matrix. For animated gates this changes with the phase.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn animation(&self) -> Option<Animation> {
        self.animation
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    pub(crate) fn set_phase(&mut self, ts: f64) {
        if let Some(animation) = self.animation {
            self.matrix = animation.matrix_at(ts);
        }
    }

    /// Checks the shape only; the cheap test done on the evolution path.
    pub(crate) fn check_shape(&self) -> Result<()> {
        if self.matrix.width() != 2 || self.matrix.height() != 2 {
            return Err(QuantumError::malformed(
                &self.symbol,
                format!(
                    "expected a 2x2 matrix, found {}x{}",
                    self.matrix.height(),
                    self.matrix.width()
                ),
            ));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.check_shape()?;
        if !self.matrix.is_unitary(GATE_TOLERANCE) {
            return Err(QuantumError::malformed(&self.symbol, "matrix is not unitary"));
        }
        Ok(())
    }
}

/// Contents of one wire within one slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum GateSlot {
    /// Identity on this wire.
    #[default]
    Empty,
    Unitary(GateId),
    /// The other gates of the slice apply only where this wire is 1.
    Control,
    /// The other gates of the slice apply only where this wire is 0.
    AntiControl,
    /// Identity on the state; requests a probability readout for this wire.
    Peek,
}

impl GateSlot {
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_control(self) -> bool {
        matches!(self, Self::Control | Self::AntiControl)
    }

    /// The bit a control wire must hold, `None` for non-control slots.
    pub fn required_bit(self) -> Option<bool> {
        match self {
            Self::Control => Some(true),
            Self::AntiControl => Some(false),
            _ => None,
        }
    }

    pub fn gate_id(self) -> Option<GateId> {
        match self {
            Self::Unitary(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for GateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "."),
            Self::Unitary(id) => write!(f, "#{}", id.0),
            Self::Control => write!(f, "@"),
            Self::AntiControl => write!(f, "o"),
            Self::Peek => write!(f, "?"),
        }
    }
}
