// Wall-clock animation sequencer.
//
// Cycles through a fixed list of mood presets, smoothly blending the ten
// shader parameters in and back out. The calendar is driven by an external
// self-rescheduling timer calling [`AnimationState::on_timer`]; the render
// loop samples interpolated values once per frame via
// [`AnimationState::sample`]. Keeping the state in an explicit object (no
// captured globals) lets the whole machine run headless in tests.

use super::constants::{PAUSE_BETWEEN_PRESETS_MS, TRANSITION_IN_MS, TRANSITION_OUT_MS};
use super::easing::{lerp, Easing};

/// The ten blendable parameters fed to the field shader. Enable flags are
/// interpolated as continuous values so toggling fades smoothly; the shader
/// receives them rounded to 0/1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlendValues {
    pub wave_amplitude: f32,
    pub wave_enabled: f32,
    pub pulse_intensity: f32,
    pub pulse_enabled: f32,
    pub ripple_amplitude: f32,
    pub ripple_enabled: f32,
    pub spiral_intensity: f32,
    pub spiral_enabled: f32,
    pub breathing_intensity: f32,
    pub breathing_enabled: f32,
}

impl BlendValues {
    pub fn lerp(&self, target: &BlendValues, t: f32) -> BlendValues {
        BlendValues {
            wave_amplitude: lerp(self.wave_amplitude, target.wave_amplitude, t),
            wave_enabled: lerp(self.wave_enabled, target.wave_enabled, t),
            pulse_intensity: lerp(self.pulse_intensity, target.pulse_intensity, t),
            pulse_enabled: lerp(self.pulse_enabled, target.pulse_enabled, t),
            ripple_amplitude: lerp(self.ripple_amplitude, target.ripple_amplitude, t),
            ripple_enabled: lerp(self.ripple_enabled, target.ripple_enabled, t),
            spiral_intensity: lerp(self.spiral_intensity, target.spiral_intensity, t),
            spiral_enabled: lerp(self.spiral_enabled, target.spiral_enabled, t),
            breathing_intensity: lerp(self.breathing_intensity, target.breathing_intensity, t),
            breathing_enabled: lerp(self.breathing_enabled, target.breathing_enabled, t),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub targets: BlendValues,
    pub hold_ms: f64,
    pub easing: Easing,
}

/// The fixed rotation, in order.
pub static PRESETS: [Preset; 4] = [
    Preset {
        name: "gentle-waves",
        targets: BlendValues {
            wave_amplitude: 0.35,
            wave_enabled: 1.0,
            pulse_intensity: 0.0,
            pulse_enabled: 0.0,
            ripple_amplitude: 0.0,
            ripple_enabled: 0.0,
            spiral_intensity: 0.0,
            spiral_enabled: 0.0,
            breathing_intensity: 0.0,
            breathing_enabled: 0.0,
        },
        hold_ms: 4000.0,
        easing: Easing::InOutSine,
    },
    Preset {
        name: "breathing-pulse",
        targets: BlendValues {
            wave_amplitude: 0.0,
            wave_enabled: 0.0,
            pulse_intensity: 0.3,
            pulse_enabled: 1.0,
            ripple_amplitude: 0.0,
            ripple_enabled: 0.0,
            spiral_intensity: 0.0,
            spiral_enabled: 0.0,
            breathing_intensity: 0.4,
            breathing_enabled: 1.0,
        },
        hold_ms: 3500.0,
        easing: Easing::InOutCubic,
    },
    Preset {
        name: "ripple-storm",
        targets: BlendValues {
            wave_amplitude: 0.0,
            wave_enabled: 0.0,
            pulse_intensity: 0.0,
            pulse_enabled: 0.0,
            ripple_amplitude: 0.45,
            ripple_enabled: 1.0,
            spiral_intensity: 0.0,
            spiral_enabled: 0.0,
            breathing_intensity: 0.0,
            breathing_enabled: 0.0,
        },
        hold_ms: 3000.0,
        easing: Easing::OutElastic,
    },
    Preset {
        name: "spiral-dance",
        targets: BlendValues {
            wave_amplitude: 0.0,
            wave_enabled: 0.0,
            pulse_intensity: 0.0,
            pulse_enabled: 0.0,
            ripple_amplitude: 0.0,
            ripple_enabled: 0.0,
            spiral_intensity: 0.5,
            spiral_enabled: 1.0,
            breathing_intensity: 0.0,
            breathing_enabled: 0.0,
        },
        hold_ms: 3500.0,
        easing: Easing::InOutBack,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerPhase {
    /// Next timer tick starts blending in the preset at the cursor.
    Enter,
    /// Next timer tick blends everything back to baseline and advances.
    Exit,
}

/// Local time bases for the five gated effects. An effect's clock runs from
/// the moment its rounded enable flag last flipped on, so each activation
/// restarts its phase instead of resuming a stale one.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectClocks {
    wave: Option<f64>,
    pulse: Option<f64>,
    ripple: Option<f64>,
    spiral: Option<f64>,
    breathing: Option<f64>,
}

/// Per-effect local times in seconds, zero while the effect is disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectTimes {
    pub wave: f32,
    pub pulse: f32,
    pub ripple: f32,
    pub spiral: f32,
    pub breathing: f32,
}

#[derive(Clone, Debug)]
pub struct AnimationState {
    cursor: usize,
    phase: TimerPhase,
    from: BlendValues,
    target: BlendValues,
    current: BlendValues,
    transition_start_ms: f64,
    transition_duration_ms: f64,
    transitioning: bool,
    easing: Easing,
    clocks: EffectClocks,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            phase: TimerPhase::Enter,
            from: BlendValues::default(),
            target: BlendValues::default(),
            current: BlendValues::default(),
            transition_start_ms: 0.0,
            transition_duration_ms: 0.0,
            transitioning: false,
            easing: Easing::InOutCubic,
            clocks: EffectClocks::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_preset(&self) -> &'static Preset {
        &PRESETS[self.cursor]
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    fn begin_transition(&mut self, targets: BlendValues, duration_ms: f64, easing: Easing, now_ms: f64) {
        self.from = self.current;
        self.target = targets;
        self.transition_start_ms = now_ms;
        self.transition_duration_ms = duration_ms;
        self.transitioning = true;
        self.easing = easing;
    }

    /// Advance the preset calendar. Called by the wall-clock timer, never by
    /// the frame loop. Returns the delay in milliseconds until the timer
    /// should fire again.
    pub fn on_timer(&mut self, now_ms: f64) -> f64 {
        match self.phase {
            TimerPhase::Enter => {
                let preset = &PRESETS[self.cursor];
                self.begin_transition(preset.targets, TRANSITION_IN_MS, preset.easing, now_ms);
                self.phase = TimerPhase::Exit;
                preset.hold_ms
            }
            TimerPhase::Exit => {
                let departing_hold = PRESETS[self.cursor].hold_ms;
                self.begin_transition(
                    BlendValues::default(),
                    TRANSITION_OUT_MS,
                    Easing::InOutSine,
                    now_ms,
                );
                self.cursor = (self.cursor + 1) % PRESETS.len();
                self.phase = TimerPhase::Enter;
                // The baseline rests for the departing preset's hold before
                // the next preset fades in.
                departing_hold + TRANSITION_OUT_MS + PAUSE_BETWEEN_PRESETS_MS
            }
        }
    }

    /// Sample the blend at `now_ms`. Interpolates from the snapshot taken at
    /// transition start toward the targets with the transition's easing;
    /// converges exactly at `t >= duration`, then updates the per-effect
    /// clocks from the rounded enable flags.
    pub fn sample(&mut self, now_ms: f64) {
        if self.transitioning {
            let progress = if self.transition_duration_ms > 0.0 {
                ((now_ms - self.transition_start_ms) / self.transition_duration_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let eased = self.easing.apply(progress as f32);
            self.current = self.from.lerp(&self.target, eased);
            if progress >= 1.0 {
                self.current = self.target;
                self.transitioning = false;
            }
        }
        self.clocks.wave = tick_clock(self.clocks.wave, self.current.wave_enabled, now_ms);
        self.clocks.pulse = tick_clock(self.clocks.pulse, self.current.pulse_enabled, now_ms);
        self.clocks.ripple = tick_clock(self.clocks.ripple, self.current.ripple_enabled, now_ms);
        self.clocks.spiral = tick_clock(self.clocks.spiral, self.current.spiral_enabled, now_ms);
        self.clocks.breathing =
            tick_clock(self.clocks.breathing, self.current.breathing_enabled, now_ms);
    }

    pub fn current(&self) -> &BlendValues {
        &self.current
    }

    /// Enable flags as the shader sees them.
    pub fn rounded_enables(&self) -> [bool; 5] {
        [
            self.current.wave_enabled.round() >= 1.0,
            self.current.pulse_enabled.round() >= 1.0,
            self.current.ripple_enabled.round() >= 1.0,
            self.current.spiral_enabled.round() >= 1.0,
            self.current.breathing_enabled.round() >= 1.0,
        ]
    }

    pub fn effect_times(&self, now_ms: f64) -> EffectTimes {
        let t = |clock: Option<f64>| clock.map(|t0| ((now_ms - t0) / 1000.0) as f32).unwrap_or(0.0);
        EffectTimes {
            wave: t(self.clocks.wave),
            pulse: t(self.clocks.pulse),
            ripple: t(self.clocks.ripple),
            spiral: t(self.clocks.spiral),
            breathing: t(self.clocks.breathing),
        }
    }
}

fn tick_clock(clock: Option<f64>, enabled_value: f32, now_ms: f64) -> Option<f64> {
    let enabled = enabled_value.round() >= 1.0;
    match (clock, enabled) {
        (None, true) => Some(now_ms),
        (Some(_), false) => None,
        (c, _) => c,
    }
}
