//! Playback state for rendered frame sequences.
//!
//! The controller owns no timing: the caller sleeps for
//! [`AnimationController::interval_ms`] between [`AnimationController::tick`]
//! calls and prints the frame at [`AnimationController::current_frame`].

/// Loop mode for animation playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    /// Stop after the last frame
    Once,
    /// Wrap back to frame 0 after the last frame
    #[default]
    Loop,
}

/// Current state of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Playback has not started or was paused
    Stopped,
    /// Playback is advancing
    Playing,
    /// The last frame was reached in [`LoopMode::Once`]
    Finished,
}

/// Frame-stepping playback controller.
#[derive(Clone, Debug)]
pub struct AnimationController {
    frame_count: usize,
    current_frame: usize,
    fps: u32,
    state: AnimationState,
    loop_mode: LoopMode,
}

impl AnimationController {
    /// Create a controller for `frame_count` frames at the given FPS.
    pub fn new(frame_count: usize, fps: u32) -> Self {
        Self {
            frame_count,
            current_frame: 0,
            fps: fps.max(1),
            state: AnimationState::Stopped,
            loop_mode: LoopMode::default(),
        }
    }

    /// Set the loop mode.
    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    /// Milliseconds between frames at the configured FPS.
    #[inline]
    pub fn interval_ms(&self) -> u64 {
        (1000.0 / self.fps as f64).max(1.0) as u64
    }

    /// Index of the frame to display now.
    #[inline]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Current playback state.
    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Start or resume playback.
    pub fn play(&mut self) {
        if self.frame_count > 0 && self.state != AnimationState::Finished {
            self.state = AnimationState::Playing;
        }
    }

    /// Pause playback, keeping the current frame.
    pub fn pause(&mut self) {
        if self.state == AnimationState::Playing {
            self.state = AnimationState::Stopped;
        }
    }

    /// Advance one frame.
    ///
    /// Returns `true` if the current frame changed. At the end of the
    /// sequence the controller either wraps to frame 0 or finishes,
    /// depending on the loop mode.
    pub fn tick(&mut self) -> bool {
        if self.state != AnimationState::Playing || self.frame_count == 0 {
            return false;
        }

        if self.current_frame + 1 >= self.frame_count {
            match self.loop_mode {
                LoopMode::Loop => {
                    self.current_frame = 0;
                    true
                }
                LoopMode::Once => {
                    self.state = AnimationState::Finished;
                    false
                }
            }
        } else {
            self.current_frame += 1;
            true
        }
    }
}
