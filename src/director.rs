//! The frame driver: one deterministic camera pass per tick.

use crate::blend::{BlendProfile, BlendRunner};
use crate::context::FrameContext;
use crate::diagnostics::{Fault, FaultSink, LogFaultSink};
use crate::rig::CameraRig;
use crate::stack::{CameraId, CameraStack, StackSnapshot};
use crate::transform::CameraTransform;

/// Owns a camera stack and drives it: resolve the winner, evaluate the
/// pipelines the frame needs, blend, emit.
///
/// One `tick` per host frame, strictly synchronous:
///
/// 1. sanitize the context (negative/non-finite delta time clamps to 0
///    with a latched fault);
/// 2. resolve the winning camera;
/// 3. on a winner change, start (or interrupt into) a blend sourced from
///    the last emitted transform;
/// 4. evaluate the winner's pipeline — and, while blending, tick the
///    outgoing rig's pipeline with the same delta time so its stateful
///    stages stay in the frame's time domain (its output never replaces
///    the frozen blend source);
/// 5. blend or pass through, and emit.
///
/// With no eligible camera the last emitted transform freezes — the
/// engine never emits a default or zeroed transform once it has emitted
/// anything. Registration calls must come from the same thread that
/// ticks; the per-frame path takes no locks.
pub struct CameraDirector {
    stack: CameraStack,
    blend: BlendRunner,
    emitted: CameraTransform,
    /// False until the first frame with a winner has been emitted; the
    /// first winner ever snaps because no blend source exists yet.
    has_emitted: bool,
    previous_winner: Option<CameraId>,
    sink: Box<dyn FaultSink>,
    dt_faulted: bool,
}

impl CameraDirector {
    /// Director with the default logging fault sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fault_sink(LogFaultSink)
    }

    /// Director reporting faults to a custom sink.
    pub fn with_fault_sink(sink: impl FaultSink + 'static) -> Self {
        Self {
            stack: CameraStack::new(),
            blend: BlendRunner::new(),
            emitted: CameraTransform::IDENTITY,
            has_emitted: false,
            previous_winner: None,
            sink: Box::new(sink),
            dt_faulted: false,
        }
    }

    /// Register a rig; it becomes selectable immediately.
    pub fn register(&mut self, rig: CameraRig) -> CameraId {
        self.stack.register(rig)
    }

    /// Remove a rig. Safe at any time, including for the active camera
    /// or either endpoint of an in-flight blend.
    pub fn unregister(&mut self, id: CameraId) -> Option<CameraRig> {
        self.stack.unregister(id)
    }

    /// Shared access to a registered rig.
    #[must_use]
    pub fn rig(&self, id: CameraId) -> Option<&CameraRig> {
        self.stack.rig(id)
    }

    /// Exclusive access to a registered rig (anchor updates, stage
    /// changes between ticks).
    pub fn rig_mut(&mut self, id: CameraId) -> Option<&mut CameraRig> {
        self.stack.rig_mut(id)
    }

    /// Number of registered rigs.
    #[must_use]
    pub fn camera_count(&self) -> usize {
        self.stack.len()
    }

    /// Run one frame and emit the resolved view transform.
    pub fn tick(&mut self, ctx: &FrameContext) -> CameraTransform {
        let ctx = self.sanitize(ctx);
        let snapshot = self.stack.resolve(&ctx, self.previous_winner);

        if snapshot.changed() {
            self.on_winner_change(&snapshot);
        }

        if let Some(winner) = snapshot.winner {
            // Keep the outgoing rig's stateful stages in the frame's
            // time domain; the frozen snapshot remains the blend source.
            if let Some(outgoing) = self.blend.outgoing() {
                if outgoing != winner {
                    if let Some(rig) = self.stack.rig_mut(outgoing) {
                        let _ =
                            rig.evaluate(&ctx, outgoing, self.sink.as_mut());
                    }
                }
            }

            let incoming = match self.stack.rig_mut(winner) {
                Some(rig) => {
                    rig.evaluate(&ctx, winner, self.sink.as_mut())
                }
                // Resolve only returns registered ids.
                None => self.emitted,
            };

            self.emitted = self.blend.advance(&incoming, ctx.delta_time);
            self.has_emitted = true;
        }
        // No winner: the last emitted transform freezes as-is.

        self.previous_winner = snapshot.winner;
        self.emitted
    }

    /// The transform emitted by the most recent [`tick`](Self::tick).
    #[must_use]
    pub fn current_transform(&self) -> CameraTransform {
        self.emitted
    }

    /// The camera resolved by the most recent tick, if any.
    #[must_use]
    pub fn active_camera(&self) -> Option<CameraId> {
        self.previous_winner
    }

    /// Whether a blend is in flight.
    #[must_use]
    pub fn is_blending(&self) -> bool {
        self.blend.is_blending()
    }

    /// Elapsed fraction of the in-flight blend.
    #[must_use]
    pub fn blend_progress(&self) -> Option<f32> {
        self.blend.progress()
    }

    /// Interruptions preceding the in-flight blend. Diagnostics only.
    #[must_use]
    pub fn blend_interruptions(&self) -> u32 {
        self.blend.interruptions()
    }

    /// The frozen source snapshot of the in-flight blend.
    #[must_use]
    pub fn blend_source(&self) -> Option<CameraTransform> {
        self.blend.source()
    }

    fn sanitize(&mut self, ctx: &FrameContext) -> FrameContext {
        let mut ctx = *ctx;
        if ctx.delta_time.is_finite() && ctx.delta_time >= 0.0 {
            self.dt_faulted = false;
        } else {
            if !self.dt_faulted {
                self.dt_faulted = true;
                self.sink.report(&Fault::NegativeDeltaTime {
                    delta_time: ctx.delta_time,
                });
            }
            ctx.delta_time = 0.0;
        }
        ctx
    }

    fn on_winner_change(&mut self, snapshot: &StackSnapshot) {
        let Some(incoming) = snapshot.winner else {
            // Everything went ineligible; freeze where we are.
            self.blend.cancel();
            return;
        };

        let profile = match self.stack.rig(incoming) {
            Some(rig) => rig.blend().clone(),
            None => return,
        };

        let duration = if profile.duration.is_finite()
            && profile.duration >= 0.0
        {
            profile.duration
        } else {
            self.sink.report(&Fault::InvalidBlendDuration {
                camera: incoming,
                duration: profile.duration,
            });
            0.0
        };

        if !self.has_emitted || duration <= 0.0 {
            // Nothing to blend from, or a cut profile: snap.
            self.blend.cancel();
            return;
        }

        // The last emitted transform IS the currently interpolated value
        // when a blend is in flight, so interruption and fresh start
        // share one source rule: continuity with what the viewer saw.
        self.blend.begin(
            self.emitted,
            incoming,
            snapshot.previous,
            &BlendProfile {
                duration,
                ..profile
            },
        );
    }
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CameraDirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraDirector")
            .field("cameras", &self.stack.len())
            .field("active", &self.previous_winner)
            .field("blending", &self.blend.is_blending())
            .finish_non_exhaustive()
    }
}
