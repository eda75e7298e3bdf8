//! Wayland layer-shell overlay surface
//!
//! Uses smithay-client-toolkit to host the indicator on a layer-shell
//! surface that:
//! - Renders on the overlay layer (always on top)
//! - Has no keyboard interactivity (click-through)
//! - Is positioned by anchor margins so the circle is centered on the
//!   target region
//!
//! The event loop runs on a dedicated thread and consumes
//! [`OverlayCommand`]s sent by the daemon; it owns every registration it
//! creates (surface, buffers, pulse clock) and drops them on destroy.

use std::sync::mpsc;
use std::time::Instant;

use smithay_client_toolkit::{
    compositor::{CompositorHandler, CompositorState},
    delegate_compositor, delegate_layer, delegate_output, delegate_registry, delegate_shm,
    output::{OutputHandler, OutputState},
    registry::{ProvidesRegistryState, RegistryState},
    registry_handlers,
    shell::{
        wlr_layer::{
            Anchor, KeyboardInteractivity, Layer, LayerShell, LayerShellHandler, LayerSurface,
            LayerSurfaceConfigure,
        },
        WaylandSurface,
    },
    shm::{
        slot::{Buffer, SlotPool},
        Shm, ShmHandler,
    },
};
use tiny_skia::{Color, Pixmap};
use wayland_client::{
    globals::registry_queue_init,
    protocol::{wl_output, wl_shm, wl_surface},
    Connection, QueueHandle,
};

use crate::application::ports::OverlaySnapshot;
use crate::domain::indicator::{pulse, IndicatorInstance};
use crate::infrastructure::OverlayCommand;

use super::render;

/// Error type for the layer-shell overlay
#[derive(Debug, thiserror::Error)]
pub enum LayerShellError {
    #[error("Failed to connect to Wayland: {0}")]
    Connection(#[from] wayland_client::ConnectError),
    #[error("Failed to initialize registry: {0}")]
    Registry(#[from] wayland_client::globals::GlobalError),
    #[error("Layer shell not available (compositor doesn't support wlr-layer-shell)")]
    LayerShellNotAvailable,
    #[error("Wayland dispatch error: {0}")]
    Dispatch(#[from] wayland_client::DispatchError),
    #[error("Wayland error: {0}")]
    Wayland(#[from] wayland_client::backend::WaylandError),
    #[error("Failed to create buffer pool: {0}")]
    BufferPool(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the overlay event loop until shutdown.
///
/// Returns Err if Wayland/layer-shell is not available.
pub fn run_overlay(
    rx: mpsc::Receiver<OverlayCommand>,
    diameter: u32,
) -> Result<(), LayerShellError> {
    // Connect to Wayland
    let conn = Connection::connect_to_env()?;
    let (globals, mut event_queue) = registry_queue_init(&conn)?;
    let qh = event_queue.handle();

    let mut app = LayerShellOverlay::new(&globals, &qh, rx, diameter)?;

    // Initial roundtrip to get outputs
    event_queue.roundtrip(&mut app)?;

    loop {
        // Drain pending commands (non-blocking)
        app.process_commands();

        // Create/destroy/reposition the surface to match the snapshot
        app.reconcile(&qh);

        if app.surface_mapped && app.needs_frame() {
            if let Err(e) = app.draw() {
                eprintln!("Overlay draw error: {}", e);
            }
            app.dirty = false;
        }

        if app.exit {
            break;
        }

        // Dispatch Wayland events (blocking with a short timeout so the
        // pulse keeps ticking at ~60fps)
        event_queue.flush()?;
        if let Some(guard) = event_queue.prepare_read() {
            let fd = guard.connection_fd();
            let mut poll_fds = [nix::poll::PollFd::new(fd, nix::poll::PollFlags::POLLIN)];
            let _ = nix::poll::poll(&mut poll_fds, nix::poll::PollTimeout::from(16u16));
            match guard.read() {
                Ok(_) => {}
                Err(e) => {
                    if let wayland_client::backend::WaylandError::Io(ref io_err) = e {
                        if io_err.kind() != std::io::ErrorKind::WouldBlock {
                            return Err(LayerShellError::Wayland(e));
                        }
                    } else {
                        return Err(LayerShellError::Wayland(e));
                    }
                }
            }
        }
        event_queue.dispatch_pending(&mut app)?;
    }

    Ok(())
}

/// Layer-shell overlay state
struct LayerShellOverlay {
    registry_state: RegistryState,
    output_state: OutputState,
    compositor_state: CompositorState,
    shm: Shm,
    layer_shell: LayerShell,

    rx: mpsc::Receiver<OverlayCommand>,

    // Desired on-screen state, as last applied by the daemon
    snapshot: OverlaySnapshot,

    // Pulse registration: created once when the indicator is created,
    // dropped on destroy. Holding the handle here is what lets destroy
    // actually unregister it.
    pulse_started: Option<Instant>,

    // Surface state
    layer_surface: Option<LayerSurface>,
    surface_mapped: bool,
    dirty: bool,
    exit: bool,

    // Buffer management
    pool: SlotPool,
    buffer: Option<Buffer>,

    size: u32,
}

impl LayerShellOverlay {
    fn new(
        globals: &wayland_client::globals::GlobalList,
        qh: &QueueHandle<Self>,
        rx: mpsc::Receiver<OverlayCommand>,
        diameter: u32,
    ) -> Result<Self, LayerShellError> {
        let registry_state = RegistryState::new(globals);
        let output_state = OutputState::new(globals, qh);
        let compositor_state =
            CompositorState::bind(globals, qh).map_err(|_| LayerShellError::LayerShellNotAvailable)?;
        let shm = Shm::bind(globals, qh).map_err(|_| LayerShellError::LayerShellNotAvailable)?;
        let layer_shell =
            LayerShell::bind(globals, qh).map_err(|_| LayerShellError::LayerShellNotAvailable)?;

        let size = render::surface_size(diameter);
        let pool = SlotPool::new((size * size * 4) as usize, &shm)
            .map_err(|e| LayerShellError::BufferPool(e.to_string()))?;

        Ok(Self {
            registry_state,
            output_state,
            compositor_state,
            shm,
            layer_shell,
            rx,
            snapshot: OverlaySnapshot::empty(),
            pulse_started: None,
            layer_surface: None,
            surface_mapped: false,
            dirty: false,
            exit: false,
            pool,
            buffer: None,
            size,
        })
    }

    fn process_commands(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(OverlayCommand::Apply(snapshot)) => {
                    self.snapshot = snapshot;
                    self.dirty = true;
                }
                Ok(OverlayCommand::Shutdown) => {
                    self.exit = true;
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => return,
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.exit = true;
                    return;
                }
            }
        }
    }

    /// Bring surface and pulse registration in line with the snapshot
    fn reconcile(&mut self, qh: &QueueHandle<Self>) {
        match self.snapshot.indicator {
            Some(instance) => {
                if self.pulse_started.is_none() {
                    self.pulse_started = Some(Instant::now());
                }
                if self.layer_surface.is_none() {
                    self.create_surface(qh, &instance);
                } else {
                    self.position_surface(&instance);
                }
            }
            None => {
                if self.layer_surface.is_some() {
                    self.destroy_surface();
                }
                self.pulse_started = None;
            }
        }
    }

    fn create_surface(&mut self, qh: &QueueHandle<Self>, instance: &IndicatorInstance) {
        let surface = self.compositor_state.create_surface(qh);

        let layer_surface = self.layer_shell.create_layer_surface(
            qh,
            surface,
            Layer::Overlay,
            Some("halo-indicator"),
            None, // Use default output
        );

        // Anchored top-left; margins place the circle's center on the
        // target's center
        layer_surface.set_anchor(Anchor::TOP | Anchor::LEFT);
        layer_surface.set_size(self.size, self.size);

        // No keyboard interactivity (click-through)
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::None);

        // Don't reserve space or grab focus
        layer_surface.set_exclusive_zone(-1);

        self.layer_surface = Some(layer_surface);
        self.position_surface(instance);

        // Commit to apply configuration
        if let Some(layer_surface) = &self.layer_surface {
            layer_surface.commit();
        }
        self.dirty = true;
    }

    /// Recompute margins so the surface center sits on the target center
    fn position_surface(&self, instance: &IndicatorInstance) {
        let Some(layer_surface) = &self.layer_surface else {
            return;
        };

        let (cx, cy) = instance.region.center();
        let half = self.size as f32 / 2.0;
        let left = (cx - half).round() as i32;
        let top = (cy - half).round() as i32;

        layer_surface.set_margin(top, 0, 0, left);
    }

    fn destroy_surface(&mut self) {
        if let Some(surface) = self.layer_surface.take() {
            drop(surface);
        }
        self.surface_mapped = false;
        self.buffer = None;
    }

    fn needs_frame(&self) -> bool {
        // A visible indicator animates continuously; otherwise only when
        // something changed
        let visible = self
            .snapshot
            .indicator
            .map(|i| i.visible)
            .unwrap_or(false);
        visible || self.dirty
    }

    fn draw(&mut self) -> Result<(), LayerShellError> {
        if self.layer_surface.is_none() {
            return Ok(());
        }

        // Render to pixmap first (before borrowing the pool)
        let pixmap = self.render();

        let (buffer, canvas) = self
            .pool
            .create_buffer(
                self.size as i32,
                self.size as i32,
                (self.size * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .map_err(|e| LayerShellError::BufferPool(e.to_string()))?;

        // Copy pixmap data to buffer (tiny-skia RGBA to little-endian ARGB)
        let src = pixmap.data();
        for (i, chunk) in canvas.chunks_exact_mut(4).enumerate() {
            let si = i * 4;
            chunk[0] = src[si + 2]; // B
            chunk[1] = src[si + 1]; // G
            chunk[2] = src[si]; // R
            chunk[3] = src[si + 3]; // A
        }

        let Some(layer_surface) = self.layer_surface.as_ref() else {
            return Ok(());
        };

        buffer
            .attach_to(layer_surface.wl_surface())
            .map_err(|e| LayerShellError::BufferPool(format!("Failed to attach buffer: {}", e)))?;

        layer_surface
            .wl_surface()
            .damage_buffer(0, 0, self.size as i32, self.size as i32);
        layer_surface.commit();

        // Store buffer to keep it alive
        self.buffer = Some(buffer);

        Ok(())
    }

    fn render(&self) -> Pixmap {
        // Surface size is always non-zero
        let mut pixmap = Pixmap::new(self.size, self.size).unwrap();
        pixmap.fill(Color::TRANSPARENT);

        // A hidden indicator keeps its surface but paints nothing
        let Some(instance) = self.snapshot.indicator.filter(|i| i.visible) else {
            return pixmap;
        };

        let elapsed = self
            .pulse_started
            .map(|t| t.elapsed())
            .unwrap_or_default();
        let frame = pulse::sample(elapsed);

        render::render_indicator(&mut pixmap, &instance, frame);

        pixmap
    }
}

// SCTK delegate implementations

impl CompositorHandler for LayerShellOverlay {
    fn scale_factor_changed(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _new_factor: i32,
    ) {
        self.dirty = true;
    }

    fn transform_changed(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _new_transform: wl_output::Transform,
    ) {
        self.dirty = true;
    }

    fn frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _time: u32,
    ) {
        self.dirty = true;
    }

    fn surface_enter(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _output: &wl_output::WlOutput,
    ) {
    }

    fn surface_leave(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _output: &wl_output::WlOutput,
    ) {
    }
}

impl OutputHandler for LayerShellOverlay {
    fn output_state(&mut self) -> &mut OutputState {
        &mut self.output_state
    }

    fn new_output(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
    }

    fn update_output(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
        // Output geometry/scale changed: recompute the indicator position
        // against the target's bounds on the next loop iteration
        if let Some(instance) = self.snapshot.indicator {
            self.position_surface(&instance);
        }
        self.dirty = true;
    }

    fn output_destroyed(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
    }
}

impl LayerShellHandler for LayerShellOverlay {
    fn closed(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _layer: &LayerSurface) {
        self.destroy_surface();
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        layer: &LayerSurface,
        _configure: LayerSurfaceConfigure,
        _serial: u32,
    ) {
        // Surface is now configured and can be drawn to
        self.surface_mapped = true;
        self.dirty = true;

        // Acknowledge the configure
        layer.wl_surface().commit();
    }
}

impl ShmHandler for LayerShellOverlay {
    fn shm_state(&mut self) -> &mut Shm {
        &mut self.shm
    }
}

impl ProvidesRegistryState for LayerShellOverlay {
    fn registry(&mut self) -> &mut RegistryState {
        &mut self.registry_state
    }

    registry_handlers![OutputState];
}

delegate_compositor!(LayerShellOverlay);
delegate_output!(LayerShellOverlay);
delegate_shm!(LayerShellOverlay);
delegate_layer!(LayerShellOverlay);
delegate_registry!(LayerShellOverlay);
