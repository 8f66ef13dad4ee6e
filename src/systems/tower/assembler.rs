// builds the ordered floor sequence from a parameter set

use bevy::prelude::*;

use crate::config::CONTOUR_SEGMENTS;
use super::curve::lerp;
use super::params::ParameterSet;
use super::shape::{sample_contour, Contour};
use super::transform::{compose_floor, Spine};

#[derive(Clone, Debug, PartialEq)]
pub struct FloorDescriptor {
    pub index: u32,
    // normalized height along the tower, 0 at the bottom floor
    pub progress: f32,
    pub contour: Contour,
    pub scale: f32,
    pub twist_degrees: Vec3,
    pub orientation: Quat,
    pub position: Vec3,
    pub color: [f32; 3],
}

// floor sequence of one rebuild, bottom floor first
#[derive(Clone, Debug, PartialEq)]
pub struct Tower {
    floors: Vec<FloorDescriptor>,
}

impl Tower {
    pub fn rebuild(params: &ParameterSet) -> Self {
        let floor_count = params.effective_floor_count();
        let spine = Spine::new(params);

        let floors = (0..floor_count)
            .map(|index| {
                let t = params.floor_progress(index);
                let contour = sample_contour(
                    params.shape_bottom,
                    params.shape_top,
                    params.shape_curve,
                    t,
                    params.slab_width,
                    params.slab_depth,
                    CONTOUR_SEGMENTS,
                );
                let transform = compose_floor(params, &spine, t);

                FloorDescriptor {
                    index,
                    progress: t,
                    contour,
                    scale: transform.scale,
                    twist_degrees: transform.twist_degrees,
                    orientation: transform.orientation,
                    position: transform.position,
                    // raw progress, color has no curve of its own
                    color: lerp_rgb(params.color_bottom, params.color_top, t),
                }
            })
            .collect();

        Self { floors }
    }

    pub fn floors(&self) -> &[FloorDescriptor] {
        &self.floors
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}

fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    std::array::from_fn(|i| lerp(a[i], b[i], t))
}

/// Editable parameters, the reset snapshot and the current tower.
/// Every rebuild starts a new generation, which the renderer compares to
/// release the previous tower's entities exactly once.
#[derive(Resource, Debug)]
pub struct TowerState {
    pub params: ParameterSet,
    defaults: ParameterSet,
    tower: Tower,
    generation: u64,
}

impl TowerState {
    // `params` doubles as the reset snapshot
    pub fn new(params: ParameterSet) -> Self {
        let tower = Tower::rebuild(&params);
        Self {
            defaults: params.clone(),
            params,
            tower,
            generation: 0,
        }
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn defaults(&self) -> &ParameterSet {
        &self.defaults
    }

    pub fn rebuild(&mut self) -> &Tower {
        // swap only once the new tower is complete
        self.tower = Tower::rebuild(&self.params);
        self.generation += 1;
        debug!(
            "rebuilt tower generation {} with {} floors",
            self.generation,
            self.tower.len()
        );
        &self.tower
    }

    pub fn edit(&mut self, edit: impl FnOnce(&mut ParameterSet)) -> &Tower {
        edit(&mut self.params);
        self.rebuild()
    }

    pub fn reset(&mut self) -> &Tower {
        self.params = self.defaults.clone();
        info!("tower parameters reset to defaults");
        self.rebuild()
    }
}

#[cfg(test)]
impl Default for TowerState {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}
