use std::{
    cell::RefCell,
    f64::consts::TAU,
    rc::Rc,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use leptos::{ev, html, prelude::*};
use rand::rngs::ThreadRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::particles::{
    hexagon_points, star_points, Intensity, Particle, ParticleField, Shape, Variant, Viewport,
    LINK_COLOR,
};

/// Everything needed to stop a running animation from `on_cleanup`.
#[derive(Default)]
struct Teardown {
    running: Arc<AtomicBool>,
    frame: Arc<Mutex<Option<AnimationFrameRequestHandle>>>,
    listeners: Vec<WindowListenerHandle>,
}

impl Teardown {
    fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self
            .frame
            .lock()
            .expect("should be able to lock frame handle")
            .take()
        {
            handle.cancel();
        }
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
    }
}

struct FrameState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    rng: RefCell<ThreadRng>,
    running: Arc<AtomicBool>,
    frame: Arc<Mutex<Option<AnimationFrameRequestHandle>>>,
}

#[component]
pub fn ParticlesBackground(
    #[prop(optional)] variant: Variant,
    #[prop(optional)] intensity: Intensity,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let teardown = Arc::new(Mutex::new(Teardown::default()));

    Effect::new({
        let teardown = teardown.clone();
        move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let mut teardown = teardown.lock().expect("should be able to lock teardown");
            if teardown.is_running() {
                return;
            }
            if let Some(started) = start(canvas, variant, intensity) {
                *teardown = started;
            }
        }
    });

    on_cleanup(move || {
        teardown
            .lock()
            .expect("should be able to lock teardown")
            .stop();
    });

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            class="absolute inset-0 pointer-events-none"
            style=format!("z-index: 1; opacity: {};", variant.canvas_opacity())
        />
    }
}

fn window_viewport() -> Viewport {
    let window = window();
    let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}

fn start(canvas: HtmlCanvasElement, variant: Variant, intensity: Intensity) -> Option<Teardown> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => {
                log::warn!("2d context has unexpected type, particles disabled");
                return None;
            }
        },
        _ => {
            log::warn!("canvas 2d context unavailable, particles disabled");
            return None;
        }
    };

    let viewport = window_viewport();
    fit_canvas(&canvas, viewport);
    let mut rng = rand::thread_rng();
    let field = ParticleField::new(variant, intensity, viewport, &mut rng);
    let mobile = field.is_mobile();

    let teardown = Teardown {
        running: Arc::new(AtomicBool::new(true)),
        ..Default::default()
    };
    let state = Rc::new(FrameState {
        canvas,
        ctx,
        field: RefCell::new(field),
        rng: RefCell::new(rng),
        running: teardown.running.clone(),
        frame: teardown.frame.clone(),
    });

    let mut listeners = Vec::new();
    // pointer repulsion is desktop only
    if !mobile {
        let moved = state.clone();
        listeners.push(window_event_listener(ev::mousemove, move |e: MouseEvent| {
            let rect = moved.canvas.get_bounding_client_rect();
            moved.field.borrow_mut().set_pointer(
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
            );
        }));
        let left = state.clone();
        listeners.push(window_event_listener(ev::blur, move |_| {
            left.field.borrow_mut().clear_pointer();
        }));
    }
    {
        let state = state.clone();
        listeners.push(window_event_listener(ev::resize, move |_| {
            let viewport = window_viewport();
            fit_canvas(&state.canvas, viewport);
            let mut rng = state.rng.borrow_mut();
            state.field.borrow_mut().resize(viewport, &mut *rng);
        }));
    }

    schedule(state);
    Some(Teardown {
        listeners,
        ..teardown
    })
}

fn schedule(state: Rc<FrameState>) {
    let next = state.clone();
    match request_animation_frame_with_handle(move || tick(next)) {
        Ok(handle) => {
            *state
                .frame
                .lock()
                .expect("should be able to lock frame handle") = Some(handle);
        }
        Err(e) => log::warn!("couldn't request animation frame: {:?}", e),
    }
}

fn tick(state: Rc<FrameState>) {
    if !state.running.load(Ordering::Relaxed) {
        return;
    }
    {
        let mut field = state.field.borrow_mut();
        let mut rng = state.rng.borrow_mut();
        field.step(&mut *rng);
        draw(&state.ctx, &field);
    }
    schedule(state);
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let viewport = field.viewport();
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    let particles = field.particles();
    for particle in particles {
        draw_particle(ctx, particle);
    }

    ctx.set_line_width(0.3);
    for link in field.links() {
        let (a, b) = (&particles[link.from], &particles[link.to]);
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.set_stroke_style_str(&LINK_COLOR.to_hsla(link.opacity));
        ctx.stroke();
    }
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
    ctx.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
}

fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, style: &str) {
    ctx.begin_path();
    if let Err(e) = ctx.arc(x, y, radius, 0.0, TAU) {
        log::warn!("couldn't trace particle of radius {radius}: {:?}", e);
        return;
    }
    ctx.set_fill_style_str(style);
    ctx.fill();
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) {
    let alpha = particle.alpha();
    let color = particle.color;

    ctx.save();
    ctx.set_global_alpha(alpha);
    match particle.shape {
        Shape::Circle => {
            fill_circle(ctx, particle.x, particle.y, particle.size, &color.to_hsla(alpha));
            // glow
            fill_circle(
                ctx,
                particle.x,
                particle.y,
                particle.size * 2.0,
                &color.to_hsla(alpha * 0.1),
            );
        }
        Shape::Star => {
            trace(ctx, &star_points(particle.x, particle.y, particle.size));
            ctx.set_fill_style_str(&color.to_hsla(alpha));
            ctx.fill();
            ctx.set_stroke_style_str(&color.to_hsla(alpha * 0.5));
            ctx.set_line_width(0.5);
            ctx.stroke();
        }
        Shape::Hexagon => {
            trace(ctx, &hexagon_points(particle.x, particle.y, particle.size));
            ctx.set_stroke_style_str(&color.to_hsla(alpha));
            ctx.set_line_width(1.0);
            ctx.stroke();
        }
    }
    ctx.restore();
}
