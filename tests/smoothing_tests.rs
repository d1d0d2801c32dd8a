use tile_toolkit::data_types::{PathCommand, Point, Rect};
use tile_toolkit::error::ToolkitError;
use tile_toolkit::smoothing::{smooth_path, smooth_spark_line, subdivide_points, CatmullRom};

#[test]
fn test_catmull_rom_interpolates_endpoints() {
    let crs = CatmullRom::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 3.0),
        Point::new(3.0, 1.0),
    );
    assert_eq!(crs.q(0.0), Point::new(1.0, 2.0));
    assert_eq!(crs.q(1.0), Point::new(2.0, 3.0));
}

#[test]
fn test_subdivide_collinear_points() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
    ];
    let subdivided = subdivide_points(&points, 4).unwrap();

    // (n - 1) * subdivisions + 1 output points spanning x = 0..2.
    assert_eq!(subdivided.len(), 9);
    assert_eq!(subdivided[0], Point::new(0.0, 0.0));
    assert_eq!(subdivided[8], Point::new(2.0, 0.0));
    for p in &subdivided {
        assert!(p.y.abs() < 1e-12);
        assert!(p.x >= 0.0 && p.x <= 2.0);
    }
}

#[test]
fn test_subdivide_passes_through_input_points() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 3.0),
        Point::new(2.0, -1.0),
        Point::new(3.5, 2.0),
        Point::new(4.0, 0.0),
    ];
    let sub = 8usize;
    let subdivided = subdivide_points(&points, sub as u32).unwrap();

    assert_eq!(subdivided.len(), (points.len() - 1) * sub + 1);
    for (i, original) in points.iter().enumerate() {
        let at_boundary = subdivided[i * sub];
        assert!(
            (at_boundary.x - original.x).abs() < 1e-9
                && (at_boundary.y - original.y).abs() < 1e-9,
            "input point {} not preserved at its subdivision boundary",
            i
        );
    }
}

#[test]
fn test_subdivide_rejects_short_input() {
    let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    let err = subdivide_points(&points, 4).unwrap_err();
    assert!(matches!(err, ToolkitError::InvalidArgument(_)));
}

#[test]
fn test_subdivide_rejects_zero_subdivisions() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 0.0),
    ];
    let err = subdivide_points(&points, 0).unwrap_err();
    assert!(matches!(err, ToolkitError::InvalidArgument(_)));
}

#[test]
fn test_subdivide_large_input_matches_contract() {
    // Large enough to take the parallel path; the shape contract still holds.
    let points: Vec<Point> = (0..2000)
        .map(|i| Point::new(i as f64, (i as f64 * 0.1).sin()))
        .collect();
    let subdivided = subdivide_points(&points, 4).unwrap();

    assert_eq!(subdivided.len(), (points.len() - 1) * 4 + 1);
    assert_eq!(subdivided[0], points[0]);
    let last = subdivided[subdivided.len() - 1];
    assert!((last.x - points[points.len() - 1].x).abs() < 1e-9);
    assert!((last.y - points[points.len() - 1].y).abs() < 1e-9);
    for (i, original) in points.iter().enumerate() {
        let at_boundary = subdivided[i * 4];
        assert!((at_boundary.x - original.x).abs() < 1e-9);
        assert!((at_boundary.y - original.y).abs() < 1e-9);
    }
}

#[test]
fn test_smooth_spark_line_maps_into_bounds() {
    let data = [0.0, 5.0, 10.0, 5.0, 0.0];
    let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
    let smoothed = smooth_spark_line(&data, 0.0, 10.0, bounds, data.len()).unwrap();

    assert_eq!(smoothed.len(), (data.len() - 1) * 16 + 1);
    // First sample sits at the left edge, at the bottom of the bounds.
    assert_eq!(smoothed[0], Point::new(0.0, 50.0));
    // The peak sample maps to the top of the bounds.
    let peak = smoothed[2 * 16];
    assert!((peak.x - 50.0).abs() < 1e-9);
    assert!(peak.y.abs() < 1e-9);
}

#[test]
fn test_smooth_spark_line_flat_data_uses_value_range() {
    // All samples equal: the configured min/max take over as the range.
    let data = [5.0, 5.0, 5.0, 5.0];
    let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
    let smoothed = smooth_spark_line(&data, 0.0, 10.0, bounds, data.len()).unwrap();
    for p in &smoothed {
        assert!((p.y - 25.0).abs() < 1e-9);
    }
}

#[test]
fn test_smooth_path_two_points_is_straight() {
    // Degenerate case: control points at 1/3 and 2/3 of the segment.
    let points = [Point::new(0.0, 0.0), Point::new(3.0, 3.0)];
    let commands = smooth_path(&points, false);

    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(
        commands[1],
        PathCommand::CubicCurveTo {
            control1: Point::new(1.0, 1.0),
            control2: Point::new(2.0, 2.0),
            end: Point::new(3.0, 3.0),
        }
    );
}

#[test]
fn test_smooth_path_one_segment_per_point_pair() {
    let points = [
        Point::new(0.0, 10.0),
        Point::new(1.0, 4.0),
        Point::new(2.0, 7.0),
        Point::new(3.0, 2.0),
    ];
    let commands = smooth_path(&points, false);

    assert_eq!(commands.len(), 1 + (points.len() - 1));
    assert_eq!(commands[0], PathCommand::MoveTo(points[0]));
    for (i, command) in commands[1..].iter().enumerate() {
        match command {
            PathCommand::CubicCurveTo { end, .. } => assert_eq!(*end, points[i + 1]),
            other => panic!("expected a cubic segment, got {:?}", other),
        }
    }
}

#[test]
fn test_smooth_path_joints_are_smooth() {
    // Each interior data point is the midpoint of the surrounding control
    // points, which is what makes consecutive segments join smoothly.
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 5.0),
        Point::new(2.0, 1.0),
        Point::new(3.0, 4.0),
        Point::new(4.0, 2.0),
    ];
    let commands = smooth_path(&points, false);

    let mut controls = Vec::new();
    for command in &commands {
        if let PathCommand::CubicCurveTo {
            control1, control2, ..
        } = command
        {
            controls.push((*control1, *control2));
        }
    }
    for i in 0..controls.len() - 1 {
        let second = controls[i].1;
        let next_first = controls[i + 1].0;
        let joint = points[i + 1];
        assert!(((second.x + next_first.x) / 2.0 - joint.x).abs() < 1e-9);
        assert!(((second.y + next_first.y) / 2.0 - joint.y).abs() < 1e-9);
    }
}

#[test]
fn test_smooth_path_filled_closes_to_baseline() {
    let points = [
        Point::new(0.0, 50.0),
        Point::new(10.0, 20.0),
        Point::new(20.0, 35.0),
    ];
    let commands = smooth_path(&points, true);

    // Move to the baseline, line up to the first point, two cubics, line
    // back down, close.
    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0], PathCommand::MoveTo(Point::new(0.0, 50.0)));
    assert_eq!(commands[1], PathCommand::LineTo(points[0]));
    assert_eq!(commands[4], PathCommand::LineTo(Point::new(20.0, 50.0)));
    assert_eq!(commands[5], PathCommand::ClosePath);
}

#[test]
fn test_smooth_path_trivial_inputs() {
    assert!(smooth_path(&[], false).is_empty());
    let single = [Point::new(1.0, 2.0)];
    assert_eq!(
        smooth_path(&single, true),
        vec![PathCommand::MoveTo(single[0])]
    );
}
