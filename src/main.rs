use std::time::Instant;

use st_boundary::cgmath::Point2;
use st_boundary::math::Polyline;
use st_boundary::{
    BoundaryMapper, DecisionData, LaneMap, MainDecision, MapperConfig, ObjectDecisionType,
    Obstacle, PathData, PlanningHorizon, PolylineReferenceLine, PredictionTrajectory,
    TrajectoryPoint, VehicleParam,
};

/// Builds a straight 200 m road with vehicles crossing it at regular intervals.
fn scenario() -> (PathData, PolylineReferenceLine, DecisionData) {
    let coords: Vec<_> = (0..=400).map(|i| (0.5 * i as f64, 0.0)).collect();
    let path = PathData::from_xy(&coords);
    let line = Polyline::new([Point2::new(-100.0, 0.0), Point2::new(300.0, 0.0)])
        .expect("reference line is not degenerate");
    let reference_line = PolylineReferenceLine::new(line);

    let dynamic_obstacles = (0..20)
        .map(|i| {
            let x = 10.0 * (i + 1) as f64;
            let points = (0..80)
                .map(|j| {
                    let t = 0.1 * j as f64;
                    TrajectoryPoint::new(x, -10.0 + 3.0 * t, std::f64::consts::FRAC_PI_2, t)
                })
                .collect();
            let decision = match i % 2 {
                0 => ObjectDecisionType::Yield { distance_s: 5.0 },
                _ => ObjectDecisionType::Overtake { distance_s: 3.0 },
            };
            Obstacle {
                id: format!("crossing_{}", i),
                speed: 3.0,
                length: 4.5,
                width: 1.8,
                trajectories: vec![PredictionTrajectory::new(points, 0.0)],
                decisions: vec![decision],
            }
        })
        .collect();

    let decisions = DecisionData {
        main_decision: MainDecision::MissionComplete,
        static_obstacles: vec![],
        dynamic_obstacles,
    };
    (path, reference_line, decisions)
}

fn main() {
    let lanes = LaneMap::new();
    let mapper = BoundaryMapper::new(MapperConfig::default(), VehicleParam::default(), &lanes);
    let (path, reference_line, decisions) = scenario();
    let horizon = PlanningHorizon {
        distance: 150.0,
        time: 8.0,
    };

    println!("Mapping...");
    const NUM_CYCLES: u32 = 100;
    let start = Instant::now();
    let mut num_boundaries = 0;
    for _ in 0..NUM_CYCLES {
        let boundaries = mapper
            .get_graph_boundary(
                &TrajectoryPoint::default(),
                0.0,
                &decisions,
                &path,
                &reference_line,
                horizon,
            )
            .expect("scenario is well formed");
        num_boundaries = boundaries.len();
    }
    let cycle = start.elapsed() / NUM_CYCLES;
    println!(
        "Avg. cycle: {:?} --> {} boundaries ({:.0}% of a 100 ms budget)",
        cycle,
        num_boundaries,
        100.0 * cycle.as_secs_f64() / 0.1,
    );
}
