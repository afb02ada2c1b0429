use pixelgrid_core::{
    Canvas, Color, CoordinateMode, Direction, Framebuffer, Geometry, Quadrants,
};

fn panel(width: u16, height: u16) -> Framebuffer<Vec<Color>> {
    let _ = env_logger::try_init();

    let geometry = Geometry::grid(width, height).unwrap();
    Framebuffer::new(geometry, vec![Color::BLACK; geometry.len()]).unwrap()
}

/// Renders the panel as rows of `#` for lit and `.` for dark cells.
fn render(framebuffer: &Framebuffer<Vec<Color>>) -> Vec<String> {
    let geometry = *framebuffer.geometry();
    (0..i32::from(geometry.height()))
        .map(|y| {
            (0..i32::from(geometry.width()))
                .map(|x| {
                    let index = geometry.translate(x, y).unwrap();
                    if framebuffer.pixel(index).unwrap().is_black() {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect()
        })
        .collect()
}

fn lit_count(framebuffer: &Framebuffer<Vec<Color>>) -> usize {
    framebuffer.pixels().iter().filter(|c| !c.is_black()).count()
}

#[test]
fn test_plot_follows_serpentine_wiring() {
    let mut framebuffer = panel(3, 3);

    framebuffer.line(0, 0, 2, 0, Color::RED);

    let lit = framebuffer
        .pixels()
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_black())
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    assert_eq!(lit, [0, 5, 6]);
}

#[test]
fn test_line_horizontal() {
    let mut framebuffer = panel(5, 1);

    framebuffer.line(0, 0, 4, 0, Color::WHITE);

    assert_eq!(render(&framebuffer), ["#####"]);
    assert_eq!(lit_count(&framebuffer), 5);
}

#[test]
fn test_line_diagonal() {
    let mut framebuffer = panel(4, 4);

    framebuffer.line(0, 0, 3, 3, Color::WHITE);

    assert_eq!(render(&framebuffer), ["#...", ".#..", "..#.", "...#"]);
    assert_eq!(lit_count(&framebuffer), 4);
}

#[test]
fn test_line_steep() {
    let mut framebuffer = panel(2, 5);

    framebuffer.line(0, 0, 1, 4, Color::WHITE);

    assert_eq!(render(&framebuffer), ["#.", "#.", ".#", ".#", ".#"]);
}

#[test]
fn test_line_endpoints_order_does_not_matter() {
    let mut forward = panel(6, 4);
    let mut backward = panel(6, 4);

    forward.line(0, 3, 5, 0, Color::GREEN);
    backward.line(5, 0, 0, 3, Color::GREEN);

    assert_eq!(forward.pixels(), backward.pixels());
}

#[test]
fn test_line_single_point() {
    let mut framebuffer = panel(3, 3);

    framebuffer.line(1, 1, 1, 1, Color::BLUE);

    assert_eq!(render(&framebuffer), ["...", ".#.", "..."]);
}

#[test]
fn test_line_clipped() {
    let mut framebuffer = panel(5, 3);

    framebuffer.line(-2, 1, 6, 1, Color::WHITE);

    assert_eq!(render(&framebuffer), [".....", "#####", "....."]);
}

#[test]
fn test_hv_line_directions() {
    let mut framebuffer = panel(5, 5);

    framebuffer.hv_line(2, 2, 3, Direction::Right, Color::WHITE);
    assert_eq!(render(&framebuffer)[2], "..###");

    framebuffer.clear();
    framebuffer.hv_line(2, 2, 3, Direction::Left, Color::WHITE);
    assert_eq!(render(&framebuffer)[2], "###..");

    framebuffer.clear();
    framebuffer.hv_line(1, 4, 2, Direction::Up, Color::WHITE);
    assert_eq!(render(&framebuffer), [".....", ".....", ".....", ".#...", ".#..."]);

    framebuffer.clear();
    framebuffer.hv_line(1, 0, 7, Direction::Down, Color::WHITE);
    assert_eq!(render(&framebuffer), [".#..."; 5]);
}

#[test]
fn test_hv_line_empty() {
    let mut framebuffer = panel(3, 3);

    framebuffer.hv_line(0, 0, 0, Direction::Right, Color::WHITE);
    framebuffer.hv_line(0, 0, -3, Direction::Down, Color::WHITE);

    assert_eq!(lit_count(&framebuffer), 0);
}

#[test]
fn test_rect_outline() {
    let mut framebuffer = panel(5, 4);

    framebuffer.rect(0, 0, 3, 2, Color::WHITE);

    assert_eq!(render(&framebuffer), ["####.", "#..#.", "####.", "....."]);
}

#[test]
fn test_rect_reversed_corners() {
    let mut forward = panel(5, 4);
    let mut backward = panel(5, 4);

    forward.rect(1, 0, 4, 3, Color::RED);
    backward.rect(4, 3, 1, 0, Color::RED);

    assert_eq!(forward.pixels(), backward.pixels());
}

#[test]
fn test_rect_degenerate() {
    let mut framebuffer = panel(4, 3);

    framebuffer.rect(0, 1, 3, 1, Color::WHITE);
    framebuffer.rect(2, 2, 2, 2, Color::WHITE);

    assert_eq!(render(&framebuffer), ["....", "####", "..#."]);
}

#[test]
fn test_rect_fill() {
    let mut framebuffer = panel(5, 4);

    framebuffer.rect_fill(1, 1, 3, 2, Color::WHITE);

    assert_eq!(render(&framebuffer), [".....", ".###.", ".###.", "....."]);
}

#[test]
fn test_triangle() {
    let mut framebuffer = panel(5, 5);

    framebuffer.triangle((0, 0), (4, 0), (0, 4), Color::WHITE);

    assert_eq!(
        render(&framebuffer),
        ["#####", "#..#.", "#.#..", "##...", "#...."]
    );
}

#[test]
fn test_circle() {
    let mut framebuffer = panel(5, 5);

    framebuffer.circle(2, 2, 2, Color::WHITE);

    assert_eq!(
        render(&framebuffer),
        [".###.", "#...#", "#...#", "#...#", ".###."]
    );
}

#[test]
fn test_circle_zero_radius() {
    let mut framebuffer = panel(3, 3);

    framebuffer.circle(1, 1, 0, Color::WHITE);
    framebuffer.circle(1, 1, -1, Color::RED);

    assert_eq!(render(&framebuffer), ["...", ".#.", "..."]);
    assert_eq!(framebuffer.pixel(4), Some(Color::WHITE));
}

#[test]
fn test_circle_off_panel() {
    let mut framebuffer = panel(3, 3);

    framebuffer.circle(0, 0, 2, Color::WHITE);

    assert_eq!(render(&framebuffer), ["..#", "..#", "##."]);
}

#[test]
fn test_circle_single_quadrant() {
    let mut framebuffer = panel(5, 5);

    framebuffer.circle_quadrants(2, 2, 2, Quadrants::UPPER_RIGHT, Color::WHITE);

    assert_eq!(
        render(&framebuffer),
        [".....", ".....", ".....", "....#", "...#."]
    );
}

#[test]
fn test_clamp_to_origin_mode() {
    let geometry = Geometry::grid(3, 3)
        .unwrap()
        .with_mode(CoordinateMode::ClampToOrigin);
    let mut framebuffer = Framebuffer::new(geometry, vec![Color::BLACK; 9]).unwrap();

    framebuffer.plot(5, 1, Color::WHITE);
    framebuffer.plot(2, -4, Color::WHITE);

    assert_eq!(render(&framebuffer), ["..#", "#..", "..."]);
}

#[test]
fn test_hv_line_extreme_coordinates() {
    let mut framebuffer = panel(3, 3);

    framebuffer.hv_line(i32::MAX - 1, 0, 3, Direction::Right, Color::WHITE);
    framebuffer.hv_line(i32::MIN, 2, i32::MAX, Direction::Left, Color::WHITE);
    assert_eq!(lit_count(&framebuffer), 0);

    framebuffer.hv_line(-2, 1, i32::MAX, Direction::Right, Color::WHITE);
    assert_eq!(render(&framebuffer), ["...", "###", "..."]);
}

#[test]
fn test_line_extreme_coordinates() {
    let mut framebuffer = panel(3, 3);

    // The row changes halfway through the line, long before the panel.
    framebuffer.line(i32::MIN, 0, 1, 1, Color::WHITE);
    assert_eq!(render(&framebuffer), ["...", "##.", "..."]);

    framebuffer.clear();
    framebuffer.line(i32::MIN, 2, i32::MAX, 2, Color::WHITE);
    framebuffer.line(1, i32::MAX, 1, i32::MIN, Color::WHITE);
    assert_eq!(render(&framebuffer), [".#.", ".#.", "###"]);

    framebuffer.clear();
    framebuffer.line(i32::MIN, i32::MIN, i32::MIN + 5, i32::MAX, Color::WHITE);
    assert_eq!(lit_count(&framebuffer), 0);
}

#[test]
fn test_rect_extreme_coordinates() {
    let mut framebuffer = panel(3, 3);

    framebuffer.rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::WHITE);
    assert_eq!(lit_count(&framebuffer), 0);

    framebuffer.rect(-1, 0, i32::MAX, 2, Color::WHITE);
    assert_eq!(render(&framebuffer), ["###", "...", "###"]);

    framebuffer.clear();
    framebuffer.rect_fill(i32::MIN, 1, i32::MAX, i32::MAX, Color::WHITE);
    assert_eq!(render(&framebuffer), ["...", "###", "###"]);
}

#[test]
fn test_circle_extreme_coordinates() {
    let mut framebuffer = panel(3, 3);

    framebuffer.circle(1, 1, i32::MAX, Color::WHITE);
    framebuffer.circle(i32::MIN, i32::MIN, 3, Color::WHITE);
    framebuffer.circle_quadrants(0, 0, i32::MAX, Quadrants::ALL, Color::WHITE);
    assert_eq!(lit_count(&framebuffer), 0);
}

#[test]
fn test_clamp_to_origin_extreme_coordinates() {
    let geometry = Geometry::grid(3, 3)
        .unwrap()
        .with_mode(CoordinateMode::ClampToOrigin);
    let mut framebuffer = Framebuffer::new(geometry, vec![Color::BLACK; 9]).unwrap();

    framebuffer.hv_line(i32::MAX - 1, 0, 3, Direction::Right, Color::WHITE);

    assert_eq!(render(&framebuffer), ["#..", "...", "..."]);
}

#[test]
fn test_heapless_framebuffer_drawing() {
    let geometry = Geometry::grid(4, 2).unwrap();
    let mut framebuffer = Framebuffer::<heapless::Vec<Color, 8>>::heapless(geometry).unwrap();

    framebuffer.rect_fill(0, 0, 3, 1, Color::BLUE);

    assert!(framebuffer.pixels().iter().all(|&c| c == Color::BLUE));
}
