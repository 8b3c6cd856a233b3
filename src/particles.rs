//! Decorative particle field simulation.
//!
//! Everything here is independent of the DOM so the frame update can be
//! exercised natively; the canvas component in `app::particles` only draws
//! what this module computes.

use std::f64::consts::PI;

use rand::Rng;

pub const MOBILE_BREAKPOINT: f64 = 768.0;

const DESKTOP_BASE_COUNT: f64 = 60.0;
const MOBILE_BASE_COUNT: f64 = 20.0;

const REPULSION_RADIUS: f64 = 80.0;
const REPULSION_STRENGTH: f64 = 0.005;
const BOUNCE_DAMPING: f64 = -0.8;
const FRICTION: f64 = 0.998;

const DESKTOP_LINK_DISTANCE: f64 = 100.0;
const MOBILE_LINK_DISTANCE: f64 = 60.0;
const LINK_MAX_OPACITY: f64 = 0.05;

pub const LINK_COLOR: Hsl = Hsl::new(35.0, 91.0, 58.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_hsla(self, alpha: f64) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, alpha
        )
    }
}

const HERO_PALETTE: [Hsl; 3] = [
    Hsl::new(200.0, 80.0, 60.0),
    Hsl::new(280.0, 80.0, 60.0),
    Hsl::new(35.0, 91.0, 58.0),
];

const ABOUT_PALETTE: [Hsl; 3] = [
    Hsl::new(200.0, 70.0, 55.0),
    Hsl::new(35.0, 91.0, 58.0),
    Hsl::new(180.0, 70.0, 55.0),
];

const EXPERIENCE_PALETTE: [Hsl; 3] = [
    Hsl::new(260.0, 75.0, 62.0),
    Hsl::new(35.0, 91.0, 58.0),
    Hsl::new(190.0, 80.0, 50.0),
];

const SKILLS_PALETTE: [Hsl; 3] = [
    Hsl::new(35.0, 91.0, 58.0),
    Hsl::new(217.0, 90.0, 60.0),
    Hsl::new(258.0, 90.0, 66.0),
];

const PORTFOLIO_PALETTE: [Hsl; 3] = [
    Hsl::new(260.0, 80.0, 65.0),
    Hsl::new(320.0, 80.0, 65.0),
    Hsl::new(35.0, 91.0, 58.0),
];

const CONTACT_PALETTE: [Hsl; 3] = [
    Hsl::new(280.0, 70.0, 60.0),
    Hsl::new(35.0, 91.0, 58.0),
    Hsl::new(240.0, 70.0, 60.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Hero,
    About,
    Experience,
    Skills,
    Portfolio,
    Contact,
}

impl Variant {
    pub fn palette(self) -> &'static [Hsl] {
        match self {
            Variant::Hero => &HERO_PALETTE,
            Variant::About => &ABOUT_PALETTE,
            Variant::Experience => &EXPERIENCE_PALETTE,
            Variant::Skills => &SKILLS_PALETTE,
            Variant::Portfolio => &PORTFOLIO_PALETTE,
            Variant::Contact => &CONTACT_PALETTE,
        }
    }

    pub fn density(self) -> f64 {
        match self {
            Variant::Hero => 1.2,
            Variant::Portfolio => 1.0,
            Variant::Skills => 0.9,
            Variant::About | Variant::Experience => 0.8,
            Variant::Contact => 0.6,
        }
    }

    /// Opacity of the whole canvas layer.
    pub fn canvas_opacity(self) -> f64 {
        if self == Variant::Hero {
            0.8
        } else {
            0.6
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub fn multiplier(self) -> f64 {
        match self {
            Intensity::Low => 0.5,
            Intensity::Medium => 1.0,
            Intensity::High => 1.5,
        }
    }
}

pub fn particle_count(variant: Variant, intensity: Intensity, mobile: bool) -> usize {
    let base = if mobile {
        MOBILE_BASE_COUNT
    } else {
        DESKTOP_BASE_COUNT
    };
    (base * intensity.multiplier() * variant.density()).floor() as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Star,
    Hexagon,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: Hsl,
    pub shape: Shape,
    pub age: f64,
    pub max_age: f64,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, palette: &[Hsl]) -> Self {
        let shape = if rng.gen_bool(0.7) {
            Shape::Circle
        } else if rng.gen_bool(0.8) {
            Shape::Star
        } else {
            Shape::Hexagon
        };
        let size_range = if shape == Shape::Circle { 2.0 } else { 3.0 };
        Self {
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            vx: (rng.gen::<f64>() - 0.5) * 0.3,
            vy: (rng.gen::<f64>() - 0.5) * 0.3,
            size: rng.gen::<f64>() * size_range + 1.0,
            opacity: rng.gen::<f64>() * 0.4 + 0.1,
            color: pick_color(rng, palette),
            shape,
            age: rng.gen::<f64>() * 200.0,
            max_age: 200.0 + rng.gen::<f64>() * 100.0,
        }
    }

    /// Twinkle alpha for the current age.
    pub fn alpha(&self) -> f64 {
        ((self.age * 0.02).sin() + 1.0) * 0.5 * self.opacity
    }

    fn repel_from(&mut self, px: f64, py: f64) {
        let dx = self.x - px;
        let dy = self.y - py;
        let distance = dx.hypot(dy);
        if distance < REPULSION_RADIUS {
            let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
            let angle = dy.atan2(dx);
            self.vx += angle.cos() * force * REPULSION_STRENGTH;
            self.vy += angle.sin() * force * REPULSION_STRENGTH;
        }
    }

    fn bounce(&mut self, viewport: Viewport) {
        if self.x <= 0.0 || self.x >= viewport.width {
            self.vx *= BOUNCE_DAMPING;
            self.x = self.x.clamp(0.0, viewport.width);
        }
        if self.y <= 0.0 || self.y >= viewport.height {
            self.vy *= BOUNCE_DAMPING;
            self.y = self.y.clamp(0.0, viewport.height);
        }
    }
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R, palette: &[Hsl]) -> Hsl {
    if palette.is_empty() {
        return LINK_COLOR;
    }
    palette[rng.gen_range(0..palette.len())]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    variant: Variant,
    intensity: Intensity,
    pointer: Option<(f64, f64)>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        variant: Variant,
        intensity: Intensity,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            viewport,
            variant,
            intensity,
            pointer: None,
        };
        field.seed(rng);
        field
    }

    fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = particle_count(self.variant, self.intensity, self.is_mobile());
        let palette = self.variant.palette();
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, self.viewport, palette))
            .collect();
        log::debug!(
            "seeded {} particles for {:?} on {}x{}",
            count,
            self.variant,
            self.viewport.width,
            self.viewport.height
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    /// Adopts a new viewport and reseeds every particle.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        self.seed(rng);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // pointer repulsion is a desktop-only effect
        let pointer = self.pointer.filter(|_| !self.is_mobile());
        let viewport = self.viewport;
        let palette = self.variant.palette();

        for particle in self.particles.iter_mut() {
            if let Some((px, py)) = pointer {
                particle.repel_from(px, py);
            }

            particle.x += particle.vx;
            particle.y += particle.vy;
            particle.age += 1.0;

            particle.bounce(viewport);

            particle.vx *= FRICTION;
            particle.vy *= FRICTION;

            if particle.age > particle.max_age {
                particle.x = rng.gen::<f64>() * viewport.width;
                particle.y = rng.gen::<f64>() * viewport.height;
                particle.age = 0.0;
                particle.color = pick_color(rng, palette);
            }
        }
    }

    pub fn link_distance(&self) -> f64 {
        if self.is_mobile() {
            MOBILE_LINK_DISTANCE
        } else {
            DESKTOP_LINK_DISTANCE
        }
    }

    /// Connection lines between nearby circle particles.
    pub fn links(&self) -> Vec<Link> {
        let max = self.link_distance();
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            if a.shape != Shape::Circle {
                continue;
            }
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                if b.shape != Shape::Circle {
                    continue;
                }
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < max {
                    links.push(Link {
                        from: i,
                        to: j,
                        opacity: (1.0 - distance / max) * LINK_MAX_OPACITY,
                    });
                }
            }
        }
        links
    }
}

/// Five-pointed star outline, alternating outer and inner radius.
pub fn star_points(x: f64, y: f64, size: f64) -> [(f64, f64); 10] {
    let spikes = 5.0;
    let mut points = [(0.0, 0.0); 10];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = i as f64 * PI / spikes;
        let radius = if i % 2 == 0 { size } else { size * 0.5 };
        *point = (x + angle.cos() * radius, y + angle.sin() * radius);
    }
    points
}

pub fn hexagon_points(x: f64, y: f64, size: f64) -> [(f64, f64); 6] {
    let mut points = [(0.0, 0.0); 6];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = i as f64 * PI / 3.0;
        *point = (x + angle.cos() * size, y + angle.sin() * size);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn desktop() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    fn field(variant: Variant, intensity: Intensity, viewport: Viewport) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleField::new(variant, intensity, viewport, &mut rng)
    }

    fn assert_in_bounds(field: &ParticleField) {
        let vp = field.viewport();
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x <= vp.width, "x out of bounds: {}", p.x);
            assert!(p.y >= 0.0 && p.y <= vp.height, "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn counts_scale_with_variant_and_intensity() {
        assert_eq!(particle_count(Variant::Hero, Intensity::Medium, false), 72);
        assert_eq!(particle_count(Variant::Portfolio, Intensity::Medium, false), 60);
        assert_eq!(particle_count(Variant::About, Intensity::Low, false), 24);
        assert_eq!(particle_count(Variant::Contact, Intensity::High, false), 54);
        assert_eq!(particle_count(Variant::Hero, Intensity::Medium, true), 24);
        assert_eq!(particle_count(Variant::Contact, Intensity::Low, true), 6);
    }

    #[test]
    fn every_variant_has_a_static_palette() {
        let variants = [
            Variant::Hero,
            Variant::About,
            Variant::Experience,
            Variant::Skills,
            Variant::Portfolio,
            Variant::Contact,
        ];
        for variant in variants {
            let palette: &'static [Hsl] = variant.palette();
            assert_eq!(palette.len(), 3, "{variant:?}");
            assert!(palette.contains(&LINK_COLOR), "{variant:?}");
        }
    }

    #[test]
    fn seeded_field_matches_count_and_palette() {
        let f = field(Variant::Portfolio, Intensity::High, desktop());
        assert_eq!(f.particles().len(), 90);
        let palette = Variant::Portfolio.palette();
        for p in f.particles() {
            assert!(palette.contains(&p.color));
            assert!(p.age < p.max_age);
            assert!((0.1..0.5).contains(&p.opacity));
            let max_size = if p.shape == Shape::Circle { 3.0 } else { 4.0 };
            assert!((1.0..max_size).contains(&p.size), "{p:?}");
            assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
        }
        assert_in_bounds(&f);
    }

    #[test]
    fn positions_stay_in_bounds_over_many_frames() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut f = ParticleField::new(Variant::Hero, Intensity::High, desktop(), &mut rng);
        f.set_pointer(640.0, 360.0);
        for frame in 0..2_000 {
            if frame % 50 == 0 {
                f.set_pointer(rng.gen::<f64>() * 1280.0, rng.gen::<f64>() * 720.0);
            }
            f.step(&mut rng);
            assert_in_bounds(&f);
        }
    }

    #[test]
    fn fast_particle_is_reflected_and_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut f = field(Variant::Hero, Intensity::Low, Viewport::new(100.0, 100.0));
        f.particles = vec![Particle {
            x: 95.0,
            y: 2.0,
            vx: 10.0,
            vy: -5.0,
            size: 1.0,
            opacity: 0.3,
            color: LINK_COLOR,
            shape: Shape::Star,
            age: 0.0,
            max_age: 250.0,
        }];
        f.step(&mut rng);
        let p = &f.particles()[0];
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 0.0);
        assert!((p.vx - 10.0 * -0.8 * FRICTION).abs() < 1e-9);
        assert!((p.vy - -5.0 * -0.8 * FRICTION).abs() < 1e-9);
    }

    #[test]
    fn age_never_exceeds_max() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut f = ParticleField::new(Variant::Skills, Intensity::Medium, desktop(), &mut rng);
        for _ in 0..700 {
            f.step(&mut rng);
            for p in f.particles() {
                assert!(p.age <= p.max_age);
            }
        }
    }

    #[test]
    fn aged_out_particle_regenerates() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut f = field(Variant::Contact, Intensity::Low, desktop());
        f.particles.truncate(1);
        f.particles[0].age = 299.5;
        f.particles[0].max_age = 300.0;
        f.step(&mut rng);
        assert_eq!(f.particles()[0].age, 0.0);
        assert!(Variant::Contact.palette().contains(&f.particles()[0].color));
    }

    #[test]
    fn pointer_pushes_nearby_particle_away() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut f = field(Variant::Hero, Intensity::Low, desktop());
        f.particles.truncate(1);
        let p = &mut f.particles[0];
        p.x = 500.0;
        p.y = 300.0;
        p.vx = 0.0;
        p.vy = 0.0;
        p.age = 0.0;
        f.set_pointer(480.0, 300.0);
        f.step(&mut rng);
        let p = &f.particles()[0];
        assert!(p.vx > 0.0);
        assert!(p.vy.abs() < 1e-12);
        assert!(p.x > 500.0);
    }

    #[test]
    fn pointer_is_ignored_on_mobile() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut f = field(Variant::Hero, Intensity::Low, Viewport::new(375.0, 667.0));
        f.particles.truncate(1);
        let p = &mut f.particles[0];
        p.x = 100.0;
        p.y = 100.0;
        p.vx = 0.0;
        p.vy = 0.0;
        f.set_pointer(90.0, 100.0);
        f.step(&mut rng);
        assert_eq!(f.particles()[0].vx, 0.0);
    }

    #[test]
    fn resize_reseeds_within_new_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut f = ParticleField::new(Variant::About, Intensity::Medium, desktop(), &mut rng);
        assert_eq!(f.particles().len(), 48);
        f.resize(Viewport::new(400.0, 300.0), &mut rng);
        assert!(f.is_mobile());
        assert_eq!(f.particles().len(), 16);
        assert_in_bounds(&f);
    }

    #[test]
    fn zero_sized_viewport_is_harmless() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut f = ParticleField::new(Variant::Hero, Intensity::Medium, Viewport::default(), &mut rng);
        for _ in 0..10 {
            f.step(&mut rng);
        }
        for p in f.particles() {
            assert_eq!((p.x, p.y), (0.0, 0.0));
        }
    }

    #[test]
    fn links_only_join_close_circles() {
        let mut f = field(Variant::Hero, Intensity::Low, desktop());
        let template = f.particles[0].clone();
        let at = |x: f64, shape: Shape| Particle {
            x,
            y: 10.0,
            shape,
            ..template.clone()
        };
        f.particles = vec![
            at(0.0, Shape::Circle),
            at(50.0, Shape::Circle),
            at(60.0, Shape::Star),
            at(300.0, Shape::Circle),
        ];
        let links = f.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].from, links[0].to), (0, 1));
        assert!((links[0].opacity - 0.025).abs() < 1e-12);
    }

    #[test]
    fn mobile_uses_shorter_links() {
        let f = field(Variant::Hero, Intensity::Low, Viewport::new(500.0, 800.0));
        assert_eq!(f.link_distance(), 60.0);
        let f = field(Variant::Hero, Intensity::Low, desktop());
        assert_eq!(f.link_distance(), 100.0);
    }

    #[test]
    fn shape_outlines() {
        let star = star_points(0.0, 0.0, 4.0);
        assert!((star[0].0 - 4.0).abs() < 1e-12);
        let inner = star[1].0.hypot(star[1].1);
        assert!((inner - 2.0).abs() < 1e-12);
        for (x, y) in hexagon_points(1.0, 1.0, 3.0) {
            assert!(((x - 1.0).hypot(y - 1.0) - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn hsla_formatting() {
        assert_eq!(LINK_COLOR.to_hsla(0.5), "hsla(35, 91%, 58%, 0.5)");
    }
}
