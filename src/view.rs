//! Per-instance glyph view: transition orchestration and rendering.

use crate::animation::{DriverStep, Timeline, TransitionDriver};
use crate::config::ViewConfig;
use crate::data::ControlPointSet;
use crate::error::{MorphError, Result};
use crate::glyph::{GlyphTable, Symbol};
use crate::interpolate::interpolate;
use crate::render::{stroke_points, PathSink};

use std::sync::Arc;

/// Where a view is in its transition lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing shown yet
    Idle,
    /// A transition is in flight
    Animating,
    /// The last transition finished or a glyph was seeded
    Settled,
}

/// Identifies one started transition.
///
/// Handles from replaced or cancelled transitions go stale; ticks and
/// completions addressed to a stale handle are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionHandle {
    generation: u64,
    pub from: Symbol,
    pub to: Symbol,
}

/// Per-view mutable state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Points drawn on the next render, `None` until something is shown
    pub current: Option<ControlPointSet>,
    /// End symbol of the most recent transition, for chained calls
    pub last_end: Option<Symbol>,
}

#[derive(Clone, Debug)]
struct ActiveTransition {
    handle: TransitionHandle,
    from: ControlPointSet,
    to: ControlPointSet,
}

/// A single glyph that morphs between symbols.
///
/// The host supplies ticks (either through [`advance`](Self::advance) with
/// the bundled driver, or by calling [`on_tick`](Self::on_tick) and
/// [`on_complete`](Self::on_complete) from its own scheduler) and a surface
/// for [`render`](Self::render). At most one transition is active; starting
/// another replaces it.
///
/// ## Example
///
/// ```rust
/// use glyph_morph::{GlyphView, RecordingSink, Symbol, ViewConfig, ViewPhase};
///
/// let mut view = GlyphView::new(ViewConfig::default());
/// view.start_transition(Symbol::Digit(1), Symbol::Digit(2)).unwrap();
///
/// while view.phase() == ViewPhase::Animating {
///     view.advance().unwrap();
/// }
///
/// let mut sink = RecordingSink::default();
/// view.render(&mut sink, 100.0, 100.0).unwrap();
/// assert_eq!(sink.strokes.len(), 1);
/// ```
#[derive(Debug)]
pub struct GlyphView<D: TransitionDriver = Timeline> {
    config: ViewConfig,
    table: Arc<GlyphTable>,
    driver: D,
    state: AnimationState,
    active: Option<ActiveTransition>,
    generation: u64,
    phase: ViewPhase,
}

impl GlyphView<Timeline> {
    /// Create a view driven by a [`Timeline`] built from the config.
    pub fn new(config: ViewConfig) -> Self {
        let timeline = Timeline::new(config.duration_ms, config.fps).with_easing(config.easing);
        Self::with_driver(config, timeline)
    }

    /// Get the interval in milliseconds between [`advance`](Self::advance) calls.
    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.driver.interval_ms()
    }
}

impl Default for GlyphView<Timeline> {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl<D: TransitionDriver> GlyphView<D> {
    /// Create a view with a custom driver.
    ///
    /// Only the stroke and sizing settings of `config` apply here;
    /// `duration_ms`, `fps` and `easing` configure the bundled [`Timeline`]
    /// and are the custom driver's own business.
    pub fn with_driver(config: ViewConfig, driver: D) -> Self {
        Self {
            config,
            table: GlyphTable::shared(),
            driver,
            state: AnimationState::default(),
            active: None,
            generation: 0,
            phase: ViewPhase::Idle,
        }
    }

    /// Replace the glyph table lookups go through.
    ///
    /// Accepts an owned table or an `Arc` shared between views.
    pub fn with_table(mut self, table: impl Into<Arc<GlyphTable>>) -> Self {
        self.table = table.into();
        self
    }

    #[inline]
    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn current_points(&self) -> Option<&ControlPointSet> {
        self.state.current.as_ref()
    }

    #[inline]
    pub fn last_end(&self) -> Option<Symbol> {
        self.state.last_end
    }

    #[inline]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Handle of the transition in flight, if any.
    pub fn active_handle(&self) -> Option<TransitionHandle> {
        self.active.as_ref().map(|a| a.handle)
    }

    /// Check whether `handle` is the transition in flight.
    pub fn is_active(&self, handle: TransitionHandle) -> bool {
        self.active_handle() == Some(handle)
    }

    /// Show a glyph immediately, without animating.
    ///
    /// Cancels any transition in flight and makes `symbol` the base for
    /// [`continue_transition`](Self::continue_transition).
    pub fn seed(&mut self, symbol: Symbol) -> Result<()> {
        let points = self.table.lookup(symbol)?;
        self.stop_active();
        self.state.current = Some(points);
        self.state.last_end = Some(symbol);
        self.phase = ViewPhase::Settled;
        tracing::debug!(target: "glyph_morph::view", %symbol, "seeded glyph");
        Ok(())
    }

    /// Start morphing from `start` to `end`.
    ///
    /// Returns `Ok(None)` without touching any state when the symbols are
    /// equal. Both glyphs are looked up and checked for equal point counts
    /// before anything changes; on success any transition in flight is
    /// cancelled and replaced.
    pub fn start_transition(
        &mut self,
        start: Symbol,
        end: Symbol,
    ) -> Result<Option<TransitionHandle>> {
        if start == end {
            tracing::trace!(
                target: "glyph_morph::view",
                %start,
                "identical symbols, no transition"
            );
            return Ok(None);
        }

        let from = self.table.lookup(start)?;
        let to = self.table.lookup(end)?;
        if from.len() != to.len() {
            return Err(MorphError::MismatchedPointCount {
                from: from.len(),
                to: to.len(),
            });
        }

        self.stop_active();

        self.generation += 1;
        let handle = TransitionHandle {
            generation: self.generation,
            from: start,
            to: end,
        };

        self.state.current = Some(from.clone());
        self.state.last_end = Some(end);
        self.active = Some(ActiveTransition { handle, from, to });
        self.phase = ViewPhase::Animating;
        self.driver.begin();

        tracing::debug!(
            target: "glyph_morph::view",
            %start,
            %end,
            generation = self.generation,
            "transition started"
        );
        Ok(Some(handle))
    }

    /// Morph from the last end symbol to `end`.
    ///
    /// Fails with [`MorphError::NoPriorTransition`] if nothing has been shown
    /// yet; seed a glyph or start a transition first.
    pub fn continue_transition(
        &mut self,
        end: Symbol,
    ) -> Result<Option<TransitionHandle>> {
        let start = self.state.last_end.ok_or(MorphError::NoPriorTransition)?;
        self.start_transition(start, end)
    }

    /// Apply progress `t` to the transition in flight.
    ///
    /// Returns `Ok(true)` when the current points changed and a redraw is
    /// needed, `Ok(false)` when nothing is animating.
    pub fn on_tick(&mut self, t: f64) -> Result<bool> {
        let Some(active) = &self.active else {
            return Ok(false);
        };
        let points = interpolate(&active.from, &active.to, t)?;
        tracing::trace!(target: "glyph_morph::view", t, "tick");
        self.state.current = Some(points);
        Ok(true)
    }

    /// Finish the transition in flight, snapping to the exact end points.
    ///
    /// Returns `true` if a transition was completed.
    pub fn on_complete(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        self.state.current = Some(active.to);
        self.state.last_end = Some(active.handle.to);
        self.phase = ViewPhase::Settled;
        tracing::debug!(
            target: "glyph_morph::view",
            end = %active.handle.to,
            "transition complete"
        );
        true
    }

    /// [`on_tick`](Self::on_tick) addressed to a specific transition.
    ///
    /// Stale handles are ignored and report `Ok(false)`.
    pub fn tick_for(&mut self, handle: TransitionHandle, t: f64) -> Result<bool> {
        if !self.is_active(handle) {
            tracing::trace!(
                target: "glyph_morph::view",
                generation = handle.generation,
                "ignoring tick for stale transition"
            );
            return Ok(false);
        }
        self.on_tick(t)
    }

    /// [`on_complete`](Self::on_complete) addressed to a specific transition.
    pub fn complete_for(&mut self, handle: TransitionHandle) -> bool {
        self.is_active(handle) && self.on_complete()
    }

    /// Run one tick of the driver.
    ///
    /// Call this from your timer. Returns `Ok(true)` when a redraw is needed.
    pub fn advance(&mut self) -> Result<bool> {
        if self.active.is_none() || !self.driver.is_running() {
            return Ok(false);
        }
        match self.driver.tick() {
            DriverStep::Idle => Ok(false),
            DriverStep::Progress(t) => self.on_tick(t),
            DriverStep::Complete => Ok(self.on_complete()),
        }
    }

    /// End a transition early, jumping straight to its end glyph.
    ///
    /// The view is left settled on the end points exactly as if the driver
    /// had run to completion. Returns `false` for stale handles.
    pub fn cancel(&mut self, handle: TransitionHandle) -> bool {
        if !self.is_active(handle) {
            return false;
        }
        self.driver.cancel();
        self.on_complete()
    }

    fn stop_active(&mut self) {
        if let Some(previous) = self.active.take() {
            self.driver.cancel();
            tracing::debug!(
                target: "glyph_morph::view",
                from = %previous.handle.from,
                to = %previous.handle.to,
                "transition replaced"
            );
        }
    }

    /// Stroke the current glyph onto a surface of the given size.
    ///
    /// Returns `Ok(false)` when nothing has been shown yet.
    pub fn render<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        width: f64,
        height: f64,
    ) -> Result<bool> {
        let Some(points) = &self.state.current else {
            return Ok(false);
        };
        let scale = self.config.sizing.scale(width, height);
        stroke_points(sink, points, scale, &self.config.stroke_style())?;
        Ok(true)
    }
}
