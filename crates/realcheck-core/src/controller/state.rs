use std::sync::Arc;

use crate::interpret::DisplayResult;
use crate::selection::SelectedImage;

/// Where the workflow currently is, with the data that phase owns.
#[derive(Clone, Debug, Default)]
pub enum Phase {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// An image is chosen and no result is shown.
    ImageSelected { image: Arc<SelectedImage> },
    /// A request for `image` is in flight.
    Analyzing { image: Arc<SelectedImage> },
    /// The verdict for `image` is on screen.
    ResultShown {
        image: Arc<SelectedImage>,
        result: DisplayResult,
    },
}

/// Data-free discriminant of [`Phase`], handy for logging and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    ImageSelected,
    Analyzing,
    ResultShown,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::ImageSelected => write!(f, "Image selected"),
            Self::Analyzing => write!(f, "Analyzing"),
            Self::ResultShown => write!(f, "Result shown"),
        }
    }
}

/// Complete view state handed to the renderer.
///
/// `generation` increases on every image selection. Requests are tagged with
/// the generation current when they were sent, so a late answer for an
/// earlier selection can be recognised and dropped.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub(super) generation: u64,
    pub(super) phase: Phase,
}

impl ViewState {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::ImageSelected { .. } => PhaseKind::ImageSelected,
            Phase::Analyzing { .. } => PhaseKind::Analyzing,
            Phase::ResultShown { .. } => PhaseKind::ResultShown,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn image(&self) -> Option<&Arc<SelectedImage>> {
        match &self.phase {
            Phase::Idle => None,
            Phase::ImageSelected { image }
            | Phase::Analyzing { image }
            | Phase::ResultShown { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&DisplayResult> {
        match &self.phase {
            Phase::ResultShown { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing { .. })
    }

    /// Whether the Detect trigger is enabled.
    pub fn can_detect(&self) -> bool {
        matches!(self.phase, Phase::ImageSelected { .. })
    }
}
