//! Avatar image/fallback switching.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Image load outcome for one avatar.
pub struct AvatarState {
    has_image: bool,
    image_failed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Image lifecycle events.
pub enum AvatarEvent {
    /// The image finished loading.
    Loaded,
    /// The image failed to load.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which of the two avatar layers is visible.
pub struct AvatarVisibility {
    /// Image layer visibility.
    pub image_visible: bool,
    /// Fallback layer visibility.
    pub fallback_visible: bool,
}

impl AvatarState {
    /// Initial state; without an image the fallback shows immediately.
    pub fn new(has_image: bool) -> Self {
        Self {
            has_image,
            image_failed: false,
        }
    }

    /// Applies an image event. A failure is final for the lifetime of the state.
    pub fn apply(&mut self, event: AvatarEvent) {
        if event == AvatarEvent::Failed {
            self.image_failed = true;
        }
    }

    /// Returns `true` once the image has failed.
    pub fn image_failed(self) -> bool {
        self.image_failed
    }

    /// Current layer visibility.
    pub fn visibility(self) -> AvatarVisibility {
        let image_visible = self.has_image && !self.image_failed;
        AvatarVisibility {
            image_visible,
            fallback_visible: !image_visible,
        }
    }
}
