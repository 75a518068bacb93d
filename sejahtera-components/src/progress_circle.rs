//! Circular progress indicator with an optional percentage label.
//!
//! ## Usage
//!
//! Show how far along a checklist or plan is, as a ring that fills
//! clockwise from 12 o'clock.
//!
//! Use [`progress_circle`] to draw a single frame from arguments, or keep a
//! [`ProgressCircle`] when the progress changes over time and should animate.

mod geometry;
mod transition;

use std::time::Duration;

use derive_setters::Setters;
use sejahtera_ui::{
    Color, ComputedData, Dp, FrameClock, FrameNanosControl, Rotation, Scene, State,
};
use tracing::{debug, warn};

pub use geometry::{InvalidGeometry, ProgressGeometry, clamp_fraction, percent};
pub use transition::{ProgressTransition, TransitionPhase};

use crate::{
    animation::Easing,
    pipelines::{ArcDash, FontWeight, LabelCommand, ProgressArcCap, ProgressArcCommand},
    theme::PlanTheme,
};

/// Stroke cap for the progress arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressStrokeCap {
    /// Rounded stroke ends.
    #[default]
    Round,
    /// Flat stroke ends.
    Butt,
}

impl From<ProgressStrokeCap> for ProgressArcCap {
    fn from(cap: ProgressStrokeCap) -> Self {
        match cap {
            ProgressStrokeCap::Round => ProgressArcCap::Round,
            ProgressStrokeCap::Butt => ProgressArcCap::Butt,
        }
    }
}

/// Defaults for [`ProgressCircleArgs`].
pub struct ProgressCircleDefaults;

impl ProgressCircleDefaults {
    /// Default diameter.
    pub const SIZE: Dp = Dp(120.0);
    /// Default stroke width.
    pub const STROKE_WIDTH: Dp = Dp(12.0);
    /// Default duration of a progress transition.
    pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);
    /// Default caption under the percentage label.
    pub const LABEL_CAPTION: &'static str = "Completed";
    /// Rotation applied to the arcs so progress starts at 12 o'clock.
    pub const START_ANGLE_DEGREES: f32 = -90.0;
    /// Percentage font size as a share of the diameter.
    pub const LABEL_FONT_RATIO: f32 = 0.2;
    /// Caption font size as a share of the diameter.
    pub const CAPTION_FONT_RATIO: f32 = 0.1;
}

/// Arguments for [`progress_circle`] and [`ProgressCircle`].
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct ProgressCircleArgs {
    /// Completion in the range 0.0..=1.0. Values outside are clamped.
    pub progress: f32,

    /// Diameter of the indicator.
    pub size: Dp,

    /// Stroke width of both arcs. Must be smaller than `size`.
    pub stroke_width: Dp,

    /// Color of the progress arc.
    pub progress_color: Color,

    /// Color of the track behind the progress arc.
    pub track_color: Color,

    /// Stroke cap of the progress arc.
    pub stroke_cap: ProgressStrokeCap,

    /// Whether to draw the percentage label and caption in the middle.
    pub show_label: bool,

    /// Caption drawn under the percentage.
    #[setters(into)]
    pub caption: String,

    /// Color of the percentage text.
    pub label_color: Color,

    /// Color of the caption text.
    pub caption_color: Color,

    /// How long a progress change takes to animate. Zero disables animation.
    pub transition_duration: Duration,

    /// Timing curve of progress changes.
    pub easing: Easing,
}

impl Default for ProgressCircleArgs {
    fn default() -> Self {
        Self::themed(&PlanTheme::default())
    }
}

impl ProgressCircleArgs {
    /// Default arguments colored from `theme`.
    pub fn themed(theme: &PlanTheme) -> Self {
        Self {
            progress: 0.0,
            size: ProgressCircleDefaults::SIZE,
            stroke_width: ProgressCircleDefaults::STROKE_WIDTH,
            progress_color: theme.progress,
            track_color: theme.track,
            stroke_cap: ProgressStrokeCap::default(),
            show_label: false,
            caption: ProgressCircleDefaults::LABEL_CAPTION.to_string(),
            label_color: theme.label,
            caption_color: theme.caption,
            transition_duration: ProgressCircleDefaults::TRANSITION_DURATION,
            easing: Easing::default(),
        }
    }

    /// Geometry at the configured progress.
    pub fn geometry(&self) -> Result<ProgressGeometry, InvalidGeometry> {
        self.geometry_at(self.progress)
    }

    /// Geometry at `fraction`, with this circle's size and stroke width.
    pub fn geometry_at(&self, fraction: f32) -> Result<ProgressGeometry, InvalidGeometry> {
        ProgressGeometry::compute(fraction, self.size, self.stroke_width)
    }
}

/// # progress_circle
///
/// Draws one frame of a circular progress indicator.
///
/// ## Usage
///
/// Display a completion ratio that does not need to animate, such as a
/// snapshot or a server-rendered image.
///
/// ## Parameters
///
/// - `args`: configures the indicator; see [`ProgressCircleArgs`].
///
/// ## Examples
///
/// ```
/// use sejahtera_components::{
///     pipelines::ProgressArcCommand,
///     progress_circle::{ProgressCircleArgs, progress_circle},
/// };
///
/// let scene = progress_circle(&ProgressCircleArgs::default().progress(0.5).show_label(true));
/// assert_eq!(scene.commands_of::<ProgressArcCommand>().len(), 2);
/// assert_eq!(scene.description(), Some("50% complete"));
/// ```
pub fn progress_circle(args: &ProgressCircleArgs) -> Scene {
    if let Err(err) = args.geometry() {
        warn!(%err, "progress circle has invalid geometry");
    }
    draw(args, args.progress)
}

fn draw(args: &ProgressCircleArgs, fraction: f32) -> Scene {
    let mut scene = Scene::new(ComputedData::square(args.size));
    scene.set_description(format!("{}% complete", percent(fraction)));

    let geometry = match args.geometry_at(fraction) {
        Ok(geometry) => geometry,
        Err(err) => {
            debug!(%err, "skipping progress circle arcs");
            return scene;
        }
    };

    let center = geometry.center;
    let stroke_width = args.stroke_width.to_f32();
    let arcs = scene.push_rotated_layer(Rotation::about(
        ProgressCircleDefaults::START_ANGLE_DEGREES,
        center,
        center,
    ));
    if args.track_color.a > 0.0 {
        arcs.push_draw_command(ProgressArcCommand {
            color: args.track_color,
            stroke_width,
            center,
            radius: geometry.radius,
            dash: None,
            cap: ProgressArcCap::Butt,
        });
    }
    if args.progress_color.a > 0.0 && geometry.visible_length() > 0.0 {
        arcs.push_draw_command(ProgressArcCommand {
            color: args.progress_color,
            stroke_width,
            center,
            radius: geometry.radius,
            dash: Some(ArcDash {
                length: geometry.circumference,
                offset: geometry.dash_offset,
            }),
            cap: args.stroke_cap.into(),
        });
    }

    if args.show_label {
        let size = args.size.to_f32();
        let label_size = size * ProgressCircleDefaults::LABEL_FONT_RATIO;
        let caption_size = size * ProgressCircleDefaults::CAPTION_FONT_RATIO;
        let labels = scene.push_layer();
        labels.push_draw_command(LabelCommand {
            text: format!("{}%", geometry.percent()),
            x: center,
            y: center - caption_size * 0.6,
            font_size: label_size,
            weight: FontWeight::Bold,
            color: args.label_color,
        });
        if !args.caption.is_empty() {
            labels.push_draw_command(LabelCommand {
                text: args.caption.clone(),
                x: center,
                y: center + label_size * 0.6,
                font_size: caption_size,
                weight: FontWeight::Regular,
                color: args.caption_color,
            });
        }
    }

    scene
}

/// A progress circle that animates between progress values.
///
/// The host owns the completion ratio and hands every change to
/// [`set_progress`](Self::set_progress). The new value is the
/// [`target`](Self::target) right away; what [`render`](Self::render) draws
/// follows it over [`ProgressCircleArgs::transition_duration`], advanced by
/// the [`FrameClock`].
///
/// ```
/// use sejahtera_components::progress_circle::{ProgressCircle, ProgressCircleArgs};
/// use sejahtera_ui::FrameClock;
///
/// let mut clock = FrameClock::new();
/// let mut circle = ProgressCircle::new(ProgressCircleArgs::default());
/// circle.set_progress(0.5, &mut clock);
/// assert_eq!(circle.target(), 0.5);
///
/// clock.tick(0);
/// clock.tick(400_000_000);
/// assert_eq!(circle.displayed_progress(), 0.5);
/// assert!(!clock.has_pending());
/// ```
#[derive(Debug)]
pub struct ProgressCircle {
    args: ProgressCircleArgs,
    transition: State<ProgressTransition>,
}

impl ProgressCircle {
    /// Creates a settled circle showing `args.progress`.
    pub fn new(args: ProgressCircleArgs) -> Self {
        if let Err(err) = args.geometry() {
            warn!(%err, "progress circle created with invalid geometry");
        }
        let transition =
            ProgressTransition::new(args.progress, args.transition_duration, args.easing);
        Self {
            args: ProgressCircleArgs {
                progress: transition.target(),
                ..args
            },
            transition: State::new(transition),
        }
    }

    /// Current arguments; `progress` holds the latest target.
    pub fn args(&self) -> &ProgressCircleArgs {
        &self.args
    }

    /// The latest progress handed in, clamped.
    pub fn target(&self) -> f32 {
        self.transition.with(ProgressTransition::target)
    }

    /// The progress drawn by the next [`render`](Self::render).
    pub fn displayed_progress(&self) -> f32 {
        self.transition.with(ProgressTransition::value)
    }

    /// Whether a transition is in flight.
    pub fn phase(&self) -> TransitionPhase {
        self.transition.with(ProgressTransition::phase)
    }

    /// Moves the progress to `fraction`, animating from what is on screen.
    pub fn set_progress(&mut self, fraction: f32, clock: &mut FrameClock) {
        let phase = self.transition.with_mut(|t| t.retarget(fraction));
        self.args.progress = self.transition.with(ProgressTransition::target);
        if phase == TransitionPhase::Transitioning {
            self.schedule_frames(clock);
        }
    }

    /// Replaces all arguments. A changed `progress` animates like
    /// [`set_progress`](Self::set_progress).
    pub fn update(&mut self, args: ProgressCircleArgs, clock: &mut FrameClock) {
        let resized = (args.size, args.stroke_width) != (self.args.size, self.args.stroke_width);
        if resized {
            if let Err(err) = args.geometry() {
                warn!(%err, "progress circle updated with invalid geometry");
            }
        }
        let progress = args.progress;
        self.transition
            .with_mut(|t| t.set_spec(args.transition_duration, args.easing));
        self.args = args;
        self.set_progress(progress, clock);
    }

    /// Jumps to `fraction` without animating.
    pub fn snap_to(&mut self, fraction: f32) {
        self.transition.with_mut(|t| t.snap_to(fraction));
        self.args.progress = self.transition.with(ProgressTransition::target);
    }

    /// Draws the current frame.
    pub fn render(&self) -> Scene {
        draw(&self.args, self.displayed_progress())
    }

    fn schedule_frames(&self, clock: &mut FrameClock) {
        let already_scheduled = self.transition.with_mut(|t| {
            let scheduled = t.frame_scheduled();
            t.set_frame_scheduled(true);
            scheduled
        });
        if already_scheduled {
            return;
        }

        let transition = self.transition.clone();
        clock.receive_frame_nanos(move |frame_nanos| {
            transition.with_mut(|t| match t.advance(frame_nanos) {
                TransitionPhase::Transitioning => FrameNanosControl::Continue,
                TransitionPhase::Settled => {
                    t.set_frame_scheduled(false);
                    FrameNanosControl::Stop
                }
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    fn arcs(scene: &Scene) -> Vec<&ProgressArcCommand> {
        scene.commands_of::<ProgressArcCommand>()
    }

    #[test]
    fn defaults_match_the_plan_screen() {
        let args = ProgressCircleArgs::default();
        assert_eq!(args.size, Dp(120.0));
        assert_eq!(args.stroke_width, Dp(12.0));
        assert_eq!(args.progress_color, Color::from_hex(0x0EA5E9));
        assert_eq!(args.track_color, Color::from_hex(0xE5E5EA));
        assert!(!args.show_label);
    }

    #[test]
    fn scene_is_size_by_size() {
        let scene = progress_circle(&ProgressCircleArgs::default().size(Dp(80.0)).stroke_width(Dp(8.0)));
        assert_eq!(scene.size(), ComputedData::square(Dp(80.0)));
    }

    #[test]
    fn arcs_are_rotated_to_start_at_twelve() {
        let scene = progress_circle(&ProgressCircleArgs::default().progress(0.3));
        let rotation = scene.layers()[0].rotation().unwrap();
        assert_eq!(rotation.degrees, -90.0);
        assert_eq!((rotation.origin_x, rotation.origin_y), (60.0, 60.0));
    }

    #[test]
    fn progress_arc_encodes_fraction_in_dash_offset() {
        let scene = progress_circle(&ProgressCircleArgs::default().progress(0.25));
        let arcs = arcs(&scene);
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].dash, None);
        let dash = arcs[1].dash.unwrap();
        assert!((dash.offset - dash.length * 0.75).abs() < 1e-3);
        assert_eq!(arcs[1].cap, ProgressArcCap::Round);
    }

    #[test]
    fn empty_progress_draws_only_the_track() {
        let scene = progress_circle(&ProgressCircleArgs::default().progress(-0.5));
        let arcs = arcs(&scene);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].dash, None);
    }

    #[test]
    fn full_progress_closes_the_ring() {
        let scene = progress_circle(&ProgressCircleArgs::default().progress(1.5));
        let dash = arcs(&scene)[1].dash.unwrap();
        assert_eq!(dash.offset, 0.0);
    }

    #[test]
    fn invalid_geometry_renders_no_arcs() {
        let args = ProgressCircleArgs::default()
            .size(Dp(10.0))
            .stroke_width(Dp(20.0))
            .progress(0.5)
            .show_label(true);
        let scene = progress_circle(&args);
        assert!(scene.is_blank());
        assert_eq!(scene.size(), ComputedData::square(Dp(10.0)));
        assert!(matches!(args.geometry(), Err(InvalidGeometry::StrokeTooWide { .. })));
    }

    #[test]
    fn label_shows_rounded_percentage_and_caption() {
        let scene = progress_circle(
            &ProgressCircleArgs::default()
                .progress(0.666)
                .show_label(true)
                .caption("Tasks done"),
        );
        let labels = scene.commands_of::<LabelCommand>();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "67%");
        assert_eq!(labels[0].weight, FontWeight::Bold);
        assert_eq!(labels[1].text, "Tasks done");
        assert_eq!(scene.layers()[1].rotation(), None);
    }

    #[test]
    fn transparent_colors_are_skipped() {
        let scene = progress_circle(
            &ProgressCircleArgs::default()
                .progress(0.5)
                .track_color(Color::TRANSPARENT),
        );
        assert_eq!(arcs(&scene).len(), 1);
    }

    #[test]
    fn component_animates_toward_new_progress() {
        let mut clock = FrameClock::new();
        let mut circle = ProgressCircle::new(ProgressCircleArgs::default().progress(0.2));
        circle.set_progress(0.8, &mut clock);

        assert_eq!(circle.target(), 0.8);
        assert_eq!(circle.args().progress, 0.8);
        assert_eq!(circle.displayed_progress(), 0.2);
        assert_eq!(circle.phase(), TransitionPhase::Transitioning);

        clock.tick(0);
        clock.tick(150 * MS);
        let midway = circle.displayed_progress();
        assert!(midway > 0.2 && midway < 0.8);
        let drawn = arcs(&circle.render())[1].dash.unwrap();
        assert!((drawn.offset - drawn.length * (1.0 - midway)).abs() < 1e-3);

        clock.tick(300 * MS);
        assert_eq!(circle.displayed_progress(), 0.8);
        assert_eq!(circle.phase(), TransitionPhase::Settled);
        assert!(!clock.has_pending());
    }

    #[test]
    fn retarget_reuses_the_scheduled_frame_callback() {
        let mut clock = FrameClock::new();
        let mut circle = ProgressCircle::new(ProgressCircleArgs::default());
        circle.set_progress(0.2, &mut clock);
        clock.tick(0);
        clock.tick(100 * MS);
        let before = circle.displayed_progress();
        assert!(before > 0.0);

        circle.set_progress(0.8, &mut clock);
        assert_eq!(clock.pending(), 1);
        assert_eq!(circle.displayed_progress(), before);

        let mut previous = before;
        for frame in 7..40 {
            clock.tick(frame * 16 * MS);
            assert!(circle.displayed_progress() >= previous);
            previous = circle.displayed_progress();
        }
        assert_eq!(circle.displayed_progress(), 0.8);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn unchanged_progress_schedules_nothing() {
        let mut clock = FrameClock::new();
        let mut circle = ProgressCircle::new(ProgressCircleArgs::default().progress(0.4));
        circle.set_progress(0.4, &mut clock);
        assert!(!clock.has_pending());
    }

    #[test]
    fn update_with_zero_duration_jumps() {
        let mut clock = FrameClock::new();
        let mut circle = ProgressCircle::new(ProgressCircleArgs::default());
        circle.update(
            ProgressCircleArgs::default()
                .progress(0.9)
                .transition_duration(Duration::ZERO)
                .show_label(true),
            &mut clock,
        );
        assert_eq!(circle.displayed_progress(), 0.9);
        assert!(!clock.has_pending());
        assert!(circle.args().show_label);
    }

    #[test]
    fn invalid_component_still_tracks_progress() {
        let mut clock = FrameClock::new();
        let mut circle = ProgressCircle::new(
            ProgressCircleArgs::default()
                .size(Dp(10.0))
                .stroke_width(Dp(20.0)),
        );
        circle.set_progress(0.5, &mut clock);
        clock.tick(0);
        clock.tick(500 * MS);
        assert_eq!(circle.displayed_progress(), 0.5);
        assert!(circle.render().is_blank());
    }
}
