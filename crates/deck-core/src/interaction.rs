//! Overview/focus state machine driving the camera between the free-roaming
//! overview and a selected object's slide.
//!
//! The camera pose is owned here. Free controls may only borrow it mutably in
//! [`InteractionMode::Overview`] (see [`InteractionMachine::pose_mut_for_controls`]);
//! during transitions only the machine writes it, and while focused it is frozen.
//! A transition lives inside its mode variant, so a second one cannot exist
//! while the first is in flight.

use crate::camera::CameraPose;
use crate::config::{DeckConfig, ReturnPolicy};
use crate::easing::{ease_quarter_cosine, progress};
use crate::scene::FocusableObject;
use instant::Instant;
use std::time::Duration;

/// Receiver for slide visibility changes requested by the state machine.
pub trait SlideSurface {
    fn show(&mut self, index: usize);
    fn hide(&mut self);
}

/// A timed, eased camera move between two poses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    from: CameraPose,
    to: CameraPose,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(from: CameraPose, to: CameraPose, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn start_pose(&self) -> CameraPose {
        self.from
    }

    pub fn end_pose(&self) -> CameraPose {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = if now > self.started_at {
            now - self.started_at
        } else {
            Duration::ZERO
        };
        progress(elapsed, self.duration)
    }

    /// Pose at `now`, and whether the transition has finished.
    pub fn sample(&self, now: Instant) -> (CameraPose, bool) {
        let p = self.progress(now);
        if p >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp(self.to, ease_quarter_cosine(p)), false)
    }
}

/// The focused object plus the pose the camera left from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub origin: CameraPose,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionMode {
    Overview,
    TransitioningIn {
        selection: Selection,
        transition: Transition,
    },
    Focused {
        selection: Selection,
    },
    TransitioningOut {
        selection: Selection,
        transition: Transition,
    },
}

impl InteractionMode {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionMode::Overview => "overview",
            InteractionMode::TransitioningIn { .. } => "transitioning-in",
            InteractionMode::Focused { .. } => "focused",
            InteractionMode::TransitioningOut { .. } => "transitioning-out",
        }
    }

    /// Hover highlighting and free camera controls are only live in the overview.
    pub fn accepts_hover(&self) -> bool {
        matches!(self, InteractionMode::Overview)
    }
}

/// Mode change reported by [`InteractionMachine::tick`] when a transition lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Focused(usize),
    Overview,
}

pub struct InteractionMachine {
    config: DeckConfig,
    mode: InteractionMode,
    pose: CameraPose,
}

impl InteractionMachine {
    pub fn new(config: DeckConfig, initial_pose: CameraPose) -> Self {
        Self {
            config,
            mode: InteractionMode::Overview,
            pose: initial_pose,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn selection(&self) -> Option<usize> {
        match self.mode {
            InteractionMode::Overview => None,
            InteractionMode::TransitioningIn { selection, .. }
            | InteractionMode::Focused { selection }
            | InteractionMode::TransitioningOut { selection, .. } => Some(selection.index),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.mode,
            InteractionMode::TransitioningIn { .. } | InteractionMode::TransitioningOut { .. }
        )
    }

    pub fn accepts_hover(&self) -> bool {
        self.mode.accepts_hover()
    }

    pub fn controls_enabled(&self) -> bool {
        matches!(self.mode, InteractionMode::Overview)
    }

    /// Mutable access to the camera pose for free orbit/walk controls.
    /// `None` whenever the machine itself owns the camera.
    pub fn pose_mut_for_controls(&mut self) -> Option<&mut CameraPose> {
        match self.mode {
            InteractionMode::Overview => Some(&mut self.pose),
            _ => None,
        }
    }

    /// Handle a click resolved to `hit`. Starts flying toward the object when
    /// in the overview; otherwise the click is dropped. Returns whether a
    /// transition started.
    pub fn click(&mut self, hit: Option<&FocusableObject>, now: Instant) -> bool {
        if !matches!(self.mode, InteractionMode::Overview) {
            log::debug!("[interaction] click ignored while {}", self.mode.name());
            return false;
        }
        let Some(object) = hit else {
            return false;
        };
        let target = object.focus_pose(self.config.standoff_factor);
        let selection = Selection {
            index: object.index,
            origin: self.pose,
        };
        self.mode = InteractionMode::TransitioningIn {
            selection,
            transition: Transition::new(self.pose, target, now, self.config.transition_in),
        };
        log::info!("[interaction] focusing {} ({})", object.index, object.name);
        true
    }

    /// Leave the focused slide. The panel is hidden right away; the camera
    /// then eases back. Ignored unless focused.
    pub fn request_return<S: SlideSurface + ?Sized>(&mut self, now: Instant, slides: &mut S) -> bool {
        let InteractionMode::Focused { selection } = self.mode else {
            log::debug!("[interaction] return ignored while {}", self.mode.name());
            return false;
        };
        slides.hide();
        let target = match self.config.return_policy {
            ReturnPolicy::Overview => self.config.overview_pose,
            ReturnPolicy::Origin => selection.origin,
        };
        self.mode = InteractionMode::TransitioningOut {
            selection,
            transition: Transition::new(self.pose, target, now, self.config.transition_out),
        };
        log::info!("[interaction] returning from {}", selection.index);
        true
    }

    /// Advance an in-flight transition. Completion fires once, on the tick
    /// where progress reaches 1.
    pub fn tick<S: SlideSurface + ?Sized>(&mut self, now: Instant, slides: &mut S) -> Option<Settled> {
        match self.mode {
            InteractionMode::TransitioningIn {
                selection,
                transition,
            } => {
                let (pose, done) = transition.sample(now);
                self.pose = pose;
                if !done {
                    return None;
                }
                self.mode = InteractionMode::Focused { selection };
                slides.show(selection.index);
                log::debug!("[interaction] focused {}", selection.index);
                Some(Settled::Focused(selection.index))
            }
            InteractionMode::TransitioningOut { transition, .. } => {
                let (pose, done) = transition.sample(now);
                self.pose = pose;
                if !done {
                    return None;
                }
                self.mode = InteractionMode::Overview;
                log::debug!("[interaction] back to overview");
                Some(Settled::Overview)
            }
            InteractionMode::Overview | InteractionMode::Focused { .. } => None,
        }
    }
}
