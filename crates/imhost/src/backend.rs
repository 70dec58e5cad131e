//! The platform backend.
//!
//! One [`Backend`] per rendered surface. It registers an input listener on
//! the surface, installs clipboard support in the GUI context, and once per
//! rendered frame merges everything the host reported into the context.
//!
//! # Threading
//!
//! [`Backend::new`], [`Backend::set_mouse_wheel_sensitivity`] and dropping the
//! backend must happen on the host's message thread. [`Backend::new_frame`]
//! may be called from the render thread: it writes display metrics and frame
//! timing directly, and posts the input merge to the message thread where the
//! listener's state lives. The merge therefore lands at most one
//! message-queue turn after the frame that requested it.
//!
//! Never drop the backend while holding the context lock.

use std::sync::{Arc, Weak};

use imhost_core::config::normalize_wheel_sensitivity;
use imhost_core::{BackendConfig, BackendFlags, CommandKey, FrameClock, Result};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::clipboard::HostClipboardBridge;
use crate::context::{GuiContext, SharedContext};
use crate::frame::{self, FrameState};
use crate::host::{HostComponent, HostServices, KeyEventSink, PointerEventSink, RenderContext};
use crate::listener::{InputListener, WheelSensitivity};
use crate::liveness::{Live, Liveness, upgrade_live};
use crate::message_thread::on_message_thread;

/// Name the backend registers with the GUI context.
pub const PLATFORM_NAME: &str = "imhost";

/// State shared with the listener and with queued frame units.
pub(crate) struct Shared<C: GuiContext> {
    pub(crate) liveness: Liveness,
    pub(crate) surface: Arc<dyn HostComponent>,
    pub(crate) render: Arc<dyn RenderContext>,
    pub(crate) context: SharedContext<C>,
    pub(crate) services: HostServices,
    pub(crate) wheel_sensitivity: WheelSensitivity,
    pub(crate) consume_key_presses: bool,
    pub(crate) command_key: CommandKey,
    pub(crate) frame: Mutex<FrameState>,
    pub(crate) clock: Mutex<FrameClock>,
}

impl<C: GuiContext> Live for Shared<C> {
    fn liveness(&self) -> &Liveness {
        &self.liveness
    }
}

/// Bridges one host surface to one GUI context.
pub struct Backend<C: GuiContext> {
    shared: Arc<Shared<C>>,
    pointer_listener: Arc<dyn PointerEventSink>,
    key_listener: Arc<dyn KeyEventSink>,
}

impl<C: GuiContext> Backend<C> {
    /// Create a backend for `surface`, feeding `context`.
    ///
    /// Registers the input listener on the surface, installs a clipboard
    /// handler, names the platform and advertises cursor support. Fails only
    /// if the configured wheel sensitivity is zero or not finite; a negative
    /// sensitivity is replaced by its magnitude.
    pub fn new(
        surface: Arc<dyn HostComponent>,
        render: Arc<dyn RenderContext>,
        context: SharedContext<C>,
        services: HostServices,
        config: BackendConfig,
    ) -> Result<Self> {
        on_message_thread(services.message_thread.as_ref(), "Backend::new");
        let sensitivity = corrected_sensitivity(config.mouse_wheel_sensitivity)?;

        let shared = Arc::new(Shared {
            liveness: Liveness::new(),
            surface,
            render,
            context,
            wheel_sensitivity: WheelSensitivity::new(sensitivity),
            consume_key_presses: config.consume_key_presses,
            command_key: config.command_key,
            frame: Mutex::new(FrameState::default()),
            clock: Mutex::new(FrameClock::new()),
            services,
        });

        {
            let mut ctx = shared.context.lock();
            let bridge = HostClipboardBridge::new(Arc::clone(&shared.services.clipboard));
            ctx.set_clipboard_backend(Some(Box::new(bridge)));
            ctx.set_backend_platform_name(Some(PLATFORM_NAME));
            ctx.insert_backend_flags(BackendFlags::HAS_MOUSE_CURSORS);
        }

        let listener = Arc::new(InputListener::new(Arc::downgrade(&shared)));
        let pointer_listener: Arc<dyn PointerEventSink> = listener.clone();
        let key_listener: Arc<dyn KeyEventSink> = listener;
        shared.surface.add_mouse_listener(Arc::clone(&pointer_listener));
        shared.surface.add_key_listener(Arc::clone(&key_listener));

        shared.liveness.mark_alive();
        info!(
            sensitivity,
            consume_key_presses = shared.consume_key_presses,
            command_key = ?shared.command_key,
            "backend created"
        );

        Ok(Self {
            shared,
            pointer_listener,
            key_listener,
        })
    }

    /// Prepare the GUI context for a new frame.
    ///
    /// Callable from any thread. Publishes the surface size, framebuffer
    /// scale and frame delta, and posts the input merge (modifiers, key
    /// presses, key releases, cursor, in that order) to the message thread
    /// without waiting for it.
    pub fn new_frame(&self) {
        let shared = &self.shared;
        let width = shared.surface.width() as f32;
        let height = shared.surface.height() as f32;
        let scale = shared.render.rendering_scale() as f32;
        {
            let mut ctx = shared.context.lock();
            ctx.set_display_size(width, height);
            ctx.set_display_framebuffer_scale(scale, scale);
        }

        self.post("update_modifier_keys", |s| {
            let mut state = s.frame.lock();
            frame::update_modifier_keys(
                &mut state,
                s.services.keyboard.as_ref(),
                s.command_key,
                &s.context,
            );
        });
        self.post("update_key_presses", |s| {
            frame::update_key_presses(&mut s.frame.lock(), &s.context);
        });
        self.post("update_key_releases", |s| {
            let mut state = s.frame.lock();
            frame::update_key_releases(&mut state, s.services.keyboard.as_ref(), &s.context);
        });
        self.post("update_mouse_cursor", |s| {
            frame::update_mouse_cursor(&mut s.frame.lock(), s.surface.as_ref(), &s.context);
        });

        let delta = shared.clock.lock().tick();
        shared.context.lock().set_delta_time(delta);
    }

    fn post(&self, unit: &'static str, run: fn(&Shared<C>)) {
        let weak: Weak<Shared<C>> = Arc::downgrade(&self.shared);
        self.shared
            .services
            .message_thread
            .call_async(Box::new(move || {
                let Some(shared) = upgrade_live(&weak, unit) else {
                    return;
                };
                if on_message_thread(shared.services.message_thread.as_ref(), unit) {
                    run(&shared);
                }
            }));
    }

    /// Change the wheel multiplier. Returns the value now in effect.
    ///
    /// Zero and non-finite values are rejected and the previous multiplier
    /// stays. Negative values are replaced by their magnitude.
    pub fn set_mouse_wheel_sensitivity(&self, sensitivity: f32) -> Result<f32> {
        on_message_thread(
            self.shared.services.message_thread.as_ref(),
            "Backend::set_mouse_wheel_sensitivity",
        );
        let effective = corrected_sensitivity(sensitivity)?;
        self.shared.wheel_sensitivity.set(effective);
        debug!(effective, "wheel sensitivity set");
        Ok(effective)
    }

    /// Current wheel multiplier.
    pub fn mouse_wheel_sensitivity(&self) -> f32 {
        self.shared.wheel_sensitivity.get()
    }

    /// Whether key presses are reported to the host as consumed.
    pub fn consumes_key_presses(&self) -> bool {
        self.shared.consume_key_presses
    }

    /// Which GUI modifier the host's command key drives.
    pub fn command_key(&self) -> CommandKey {
        self.shared.command_key
    }

    /// The GUI context this backend feeds.
    pub fn context(&self) -> &SharedContext<C> {
        &self.shared.context
    }

    /// Number of keys the GUI currently believes are held.
    pub fn held_key_count(&self) -> usize {
        self.shared.frame.lock().held.len()
    }

    /// Number of key presses waiting for the next merge.
    pub fn pending_key_presses(&self) -> usize {
        self.shared.frame.lock().pending.len()
    }
}

fn corrected_sensitivity(requested: f32) -> Result<f32> {
    let effective = normalize_wheel_sensitivity(requested)?;
    if requested < 0.0 {
        warn!(requested, effective, "negative wheel sensitivity, using its magnitude");
    }
    Ok(effective)
}

impl<C: GuiContext> Drop for Backend<C> {
    fn drop(&mut self) {
        on_message_thread(self.shared.services.message_thread.as_ref(), "Backend::drop");
        self.shared.liveness.mark_dead();

        let surface = &self.shared.surface;
        surface.remove_mouse_listener(&self.pointer_listener);
        surface.remove_key_listener(&self.key_listener);

        let mut ctx = self.shared.context.lock();
        ctx.set_backend_platform_name(None);
        ctx.set_clipboard_backend(None);
        info!("backend destroyed");
    }
}

impl<C: GuiContext> std::fmt::Debug for Backend<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("live", &self.shared.liveness.is_alive())
            .field("mouse_wheel_sensitivity", &self.mouse_wheel_sensitivity())
            .field("consume_key_presses", &self.shared.consume_key_presses)
            .field("command_key", &self.shared.command_key)
            .finish_non_exhaustive()
    }
}
