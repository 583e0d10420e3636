//! 3D scene export for an external renderer.
//!
//! Builds a plain-data description of the analyzed stack: one
//! color-coded cuboid per box, the robot base marker and stand
//! cylinder, a wireframe sphere per reach radius, the pallet wireframe
//! edges, and suggested axis limits. Serialized as JSON; the core
//! result is untouched by any of this.

use pallet_reach_core::{AnalysisResult, Reachability, PALLET_HEIGHT_MM};
use serde::Serialize;

/// Render radius of the robot stand cylinder, in mm.
pub const STAND_RADIUS_MM: f64 = 200.0;

/// One axis-aligned cuboid to draw.
#[derive(Debug, Clone, Serialize)]
pub struct SceneCuboid {
    /// Placement identifier, e.g. `L01B01`.
    pub id: String,
    /// Minimum corner (x, y, z).
    pub origin: [f64; 3],
    /// Extents (width, length, height).
    pub size: [f64; 3],
    /// Classification label.
    pub category: &'static str,
    /// Fill color keyed to the classification.
    pub color: &'static str,
}

/// Robot stand cylinder from the floor to the base.
#[derive(Debug, Clone, Serialize)]
pub struct SceneCylinder {
    /// Cylinder radius.
    pub radius: f64,
    /// Cylinder height (floor to robot base).
    pub height: f64,
}

/// Wireframe reach sphere centered on the robot base.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSphere {
    /// Sphere center (x, y, z).
    pub center: [f64; 3],
    /// Sphere radius.
    pub radius: f64,
}

/// Pallet wireframe: 8 corners joined by 12 edges.
#[derive(Debug, Clone, Serialize)]
pub struct SceneWireframe {
    /// Corner coordinates.
    pub corners: [[f64; 3]; 8],
    /// Pairs of corner indices to connect.
    pub edges: [[usize; 2]; 12],
}

/// Suggested plot limits per axis.
#[derive(Debug, Clone, Serialize)]
pub struct AxisLimits {
    /// (min, max) along X.
    pub x: [f64; 2],
    /// (min, max) along Y.
    pub y: [f64; 2],
    /// (min, max) along Z.
    pub z: [f64; 2],
}

/// Complete renderable scene for one analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// One cuboid per placed box.
    pub boxes: Vec<SceneCuboid>,
    /// Robot base marker position; z includes any recommended raise.
    pub robot_base: [f64; 3],
    /// Stand cylinder under the base.
    pub stand: SceneCylinder,
    /// One sphere per policy radius, innermost first.
    pub reach_spheres: Vec<SceneSphere>,
    /// Pallet deck wireframe.
    pub pallet: SceneWireframe,
    /// Suggested axis limits.
    pub axis_limits: AxisLimits,
}

fn color_for(reachability: Reachability) -> &'static str {
    match reachability {
        Reachability::Easy | Reachability::Reachable => "green",
        Reachability::Difficult => "orange",
        Reachability::Unreachable => "red",
    }
}

impl Scene {
    /// Builds the scene from an analysis result.
    pub fn from_result(result: &AnalysisResult) -> Self {
        let scenario = &result.scenario;
        let box_spec = &scenario.box_spec;
        let robot_height = result.effective_robot_height();

        let boxes = result
            .placements
            .iter()
            .map(|p| SceneCuboid {
                id: p.id().to_string(),
                origin: [
                    p.placement.position.x,
                    p.placement.position.y,
                    p.placement.position.z,
                ],
                size: [box_spec.width, box_spec.length, box_spec.height],
                category: p.reachability.label(),
                color: color_for(p.reachability),
            })
            .collect();

        let reach_spheres = result
            .policy
            .radii()
            .into_iter()
            .map(|radius| SceneSphere {
                center: [0.0, 0.0, robot_height],
                radius,
            })
            .collect();

        let (mx, my) = (scenario.pallet.master.x, scenario.pallet.master.y);
        let (pw, pl) = (scenario.pallet.width, scenario.pallet.length);
        let corners = [
            [mx, my, 0.0],
            [mx + pw, my, 0.0],
            [mx + pw, my + pl, 0.0],
            [mx, my + pl, 0.0],
            [mx, my, PALLET_HEIGHT_MM],
            [mx + pw, my, PALLET_HEIGHT_MM],
            [mx + pw, my + pl, PALLET_HEIGHT_MM],
            [mx, my + pl, PALLET_HEIGHT_MM],
        ];
        let edges = [
            [0, 1], [1, 2], [2, 3], [3, 0], // deck bottom
            [4, 5], [5, 6], [6, 7], [7, 4], // deck top
            [0, 4], [1, 5], [2, 6], [3, 7], // verticals
        ];

        let max_reach = result.policy.max_radius();
        let stack_top =
            PALLET_HEIGHT_MM + box_spec.height * scenario.layers as f64;
        let axis_limits = AxisLimits {
            x: [-max_reach, (mx + pw).max(max_reach)],
            y: [-max_reach, (my + pl).max(max_reach)],
            z: [0.0, (robot_height + max_reach).max(stack_top)],
        };

        Self {
            boxes,
            robot_base: [0.0, 0.0, robot_height],
            stand: SceneCylinder {
                radius: STAND_RADIUS_MM,
                height: robot_height,
            },
            reach_spheres,
            pallet: SceneWireframe { corners, edges },
            axis_limits,
        }
    }

    /// Serializes the scene as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;
    use pallet_reach_core::{
        Analyzer, BoxSpec, Config, PalletSpec, PolicyVariant, RobotClass, RobotProfile, Scenario,
        SEVENTH_AXIS_RAISE_MM,
    };

    fn reference_result(variant: PolicyVariant) -> AnalysisResult {
        let scenario = Scenario::new(
            BoxSpec::new(400.0, 300.0, 200.0).unwrap(),
            PalletSpec::new(1200.0, 1000.0, Point2::new(0.0, 0.0)).unwrap(),
            2,
            RobotProfile::new(RobotClass::Cs612, 500.0).unwrap(),
        )
        .unwrap();
        Analyzer::new(Config::new().with_variant(variant))
            .analyze(&scenario)
            .unwrap()
    }

    #[test]
    fn test_scene_has_one_cuboid_per_box() {
        let result = reference_result(PolicyVariant::TwoTier);
        let scene = Scene::from_result(&result);
        assert_eq!(scene.boxes.len(), result.placements.len());
        assert_eq!(scene.boxes[0].id, "L01B01");
        assert_eq!(scene.boxes[0].size, [400.0, 300.0, 200.0]);
    }

    #[test]
    fn test_scene_base_uses_effective_height() {
        let result = reference_result(PolicyVariant::TwoTier);
        let scene = Scene::from_result(&result);
        // The reference stack triggers the 7th-axis raise.
        assert_eq!(scene.robot_base[2], 500.0 + SEVENTH_AXIS_RAISE_MM);
        assert_eq!(scene.stand.height, scene.robot_base[2]);
        assert_eq!(scene.stand.radius, STAND_RADIUS_MM);
    }

    #[test]
    fn test_scene_sphere_count_follows_policy() {
        let two = Scene::from_result(&reference_result(PolicyVariant::TwoTier));
        assert_eq!(two.reach_spheres.len(), 2);
        assert_eq!(two.reach_spheres[0].radius, 1000.0);
        assert_eq!(two.reach_spheres[1].radius, 1200.0);

        let single = Scene::from_result(&reference_result(PolicyVariant::SingleTier));
        assert_eq!(single.reach_spheres.len(), 1);
        assert_eq!(single.reach_spheres[0].radius, 1200.0);
    }

    #[test]
    fn test_pallet_wireframe_shape() {
        let scene = Scene::from_result(&reference_result(PolicyVariant::TwoTier));
        assert_eq!(scene.pallet.corners[0], [0.0, 0.0, 0.0]);
        assert_eq!(scene.pallet.corners[6], [1200.0, 1000.0, PALLET_HEIGHT_MM]);
        assert_eq!(scene.pallet.edges.len(), 12);
    }

    #[test]
    fn test_axis_limits_cover_reach_and_stack() {
        let result = reference_result(PolicyVariant::TwoTier);
        let scene = Scene::from_result(&result);
        assert_eq!(scene.axis_limits.x, [-1200.0, 1200.0]);
        assert_eq!(scene.axis_limits.y, [-1200.0, 1200.0]);
        // Raised base (1200) plus max reach (1200) dominates the stack top.
        assert_eq!(scene.axis_limits.z, [0.0, 2400.0]);
    }

    #[test]
    fn test_scene_serializes() {
        let scene = Scene::from_result(&reference_result(PolicyVariant::TwoTier));
        let json = scene.to_json().unwrap();
        assert!(json.contains("\"reach_spheres\""));
        assert!(json.contains("\"green\""));
    }
}
