use crate::api::types::BodyId;
use crate::components::{Body, VisualPart};

/// Body storage using a flat Vec indexed by `BodyId`.
/// Bodies are created once at startup and never despawned.
pub struct Scene {
    bodies: Vec<Body>,
    parts: Vec<VisualPart>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            parts: Vec::with_capacity(16),
        }
    }

    /// Add a body. Its id must equal its insertion index.
    pub fn spawn(&mut self, body: Body) {
        debug_assert_eq!(body.id.index(), self.bodies.len());
        self.bodies.push(body);
    }

    /// Attach a visual part to an already spawned body.
    pub fn attach(&mut self, part: VisualPart) {
        debug_assert!(part.owner.index() < self.bodies.len());
        self.parts.push(part);
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn parts(&self) -> &[VisualPart] {
        &self.parts
    }

    /// Parts belonging to one body.
    pub fn parts_of(&self, id: BodyId) -> impl Iterator<Item = &VisualPart> {
        self.parts.iter().filter(move |p| p.owner == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn star(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_star())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SimulationConfig;
    use crate::assets::Catalog;
    use crate::core::factory::build_scene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> Scene {
        let catalog = Catalog::solar_system().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        build_scene(&catalog, &SimulationConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn bodies_are_indexed_by_id() {
        let scene = scene();
        for (i, body) in scene.iter().enumerate() {
            assert_eq!(body.id, BodyId(i as u32));
            assert_eq!(scene.get(body.id).unwrap().name(), body.name());
        }
    }

    #[test]
    fn find_by_name_and_star() {
        let scene = scene();
        assert_eq!(scene.star().unwrap().name(), "Sun");
        assert!(scene.find_by_name("Mars").is_some());
        assert!(scene.find_by_name("Pluto").is_none());
    }

    #[test]
    fn saturn_has_two_parts() {
        let scene = scene();
        let saturn = scene.find_by_name("Saturn").unwrap().id;
        assert_eq!(scene.parts_of(saturn).count(), 2);
        let earth = scene.find_by_name("Earth").unwrap().id;
        assert_eq!(scene.parts_of(earth).count(), 1);
    }
}
