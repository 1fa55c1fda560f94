use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    constants::{
        DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR, DEFAULT_PICTURE_DIMENSIONS, DISPLAY_FILE_EXTENSION,
        DISPLAY_FILE_PREFIX, PARAMETRIC_STEPS, SURFACE_STEPS,
    },
    matrix::{self, Matrix},
    render::{
        Color,
        Picture,
        edge_list::{add_bezier_curve, add_circle, add_edge, add_hermite_curve, render_edges},
        polygon_list::{add_box, add_polygon, add_sphere, add_torus, render_polygons},
    },
};
use super::{
    COMMANDS,
    coordinate_stack::CoordinateStack,
    error::{CommandError, ScriptError},
    parser::{parse_file_name, parse_integers, parse_numbers, parse_rotation},
    tokens::{Command, Function, Schema},
};

fn numbers<const N: usize>(command: Command, arguments: Option<&str>) -> Result<[f32; N], CommandError> {
    debug_assert_eq!(command.function.schema(), Schema::Numbers(N));
    parse_numbers::<N>(command.name, arguments)
}

/// How a run ended when it wasn't aborted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Quit,
    EndOfInput,
}

/// Everything a run mutates: the picture and its depth map, the coordinate
/// stack, the two colors and the display counter. Trace lines and
/// diagnostics are written to `trace`.
pub struct ScriptContext<W: Write> {
    picture: Picture,
    coordinate_stack: CoordinateStack,
    color: Color,
    background: Color,
    display_count: usize,
    output_dir: PathBuf,
    trace: W,
}

impl<W: Write> ScriptContext<W> {
    pub fn new(trace: W, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            picture: Picture::new(DEFAULT_PICTURE_DIMENSIONS.0, DEFAULT_PICTURE_DIMENSIONS.1, &DEFAULT_BACKGROUND_COLOR),
            coordinate_stack: CoordinateStack::new(),
            color: DEFAULT_FOREGROUND_COLOR,
            background: DEFAULT_BACKGROUND_COLOR,
            display_count: 0,
            output_dir: output_dir.into(),
            trace,
        }
    }

    /// Executes commands until `quit` or the end of `lines`.
    ///
    /// Every command line is echoed as `:<line>` before it runs. A command
    /// that fails writes one diagnostic and is skipped. Commands with a
    /// parameter line always consume the next line, well formed or not.
    pub fn run<I>(&mut self, lines: I) -> Result<Termination, ScriptError>
    where
        I: IntoIterator<Item = Result<String, ScriptError>>,
    {
        let mut lines = lines.into_iter();

        while let Some(line) = lines.next() {
            let line = line?;
            writeln!(self.trace, ":{line}").map_err(ScriptError::Trace)?;

            let Some(command) = COMMANDS.get(line.trim()).copied() else {
                self.report(CommandError::UnknownCommand(line.trim().to_string()))?;
                continue;
            };

            if command.function == Function::Quit {
                log::info!("parse terminated");
                return Ok(Termination::Quit);
            }

            let arguments = if command.function.schema().takes_argument_line() {
                lines.next().transpose()?
            } else {
                None
            };

            if let Err(error) = self.execute(command, arguments.as_deref()) {
                self.report(error)?;
            }
        }

        Ok(Termination::EndOfInput)
    }

    fn report(&mut self, error: CommandError) -> Result<(), ScriptError> {
        log::debug!("skipping command: {error}");
        writeln!(self.trace, "{error}").map_err(ScriptError::Trace)
    }

    fn execute(&mut self, command: Command, arguments: Option<&str>) -> Result<(), CommandError> {
        let name = command.name;

        match command.function {
            Function::Display => {
                let file_name = format!("{}-{}.{}", DISPLAY_FILE_PREFIX, self.display_count, DISPLAY_FILE_EXTENSION);
                self.display_count += 1;
                self.write_picture(Path::new(&file_name))?;
            }

            Function::Save => {
                let file_name = parse_file_name(arguments)?;
                log::info!("saving as {}", file_name);
                self.write_picture(Path::new(&file_name))?;
            }

            Function::Clear => {
                self.picture.clear(&self.background);
            }

            // handled by the run loop before any arguments are read
            Function::Quit => {}

            Function::SetColor => {
                let [r, g, b] = parse_integers::<3>(name, arguments)?;
                self.color = (r, g, b);
            }

            Function::SetBackground => {
                let [r, g, b] = parse_integers::<3>(name, arguments)?;
                self.background = (r, g, b);
            }

            Function::Push => {
                self.coordinate_stack.push();
            }

            Function::Pop => {
                if !self.coordinate_stack.pop() {
                    return Err(CommandError::StackUnderflow);
                }
            }

            Function::Move => {
                let [a, b, c] = numbers::<3>(command, arguments)?;
                self.coordinate_stack.apply_transformation(matrix::translation(a, b, c));
            }

            Function::Scale => {
                let [a, b, c] = numbers::<3>(command, arguments)?;
                self.coordinate_stack.apply_transformation(matrix::dilation(a, b, c));
            }

            Function::Rotate => {
                let (axis, degrees) = parse_rotation(arguments)?;
                self.coordinate_stack.apply_transformation(matrix::rotation(axis, degrees));
            }

            Function::Line => {
                let [x0, y0, z0, x1, y1, z1] = numbers::<6>(command, arguments)?;
                let mut edges = matrix::new();
                add_edge(&mut edges, x0, y0, z0, x1, y1, z1);
                self.render_edges(edges);
            }

            Function::Circle => {
                let [x, y, z, r] = numbers::<4>(command, arguments)?;
                let mut edges = matrix::new();
                add_circle(&mut edges, x, y, z, r, PARAMETRIC_STEPS);
                self.render_edges(edges);
            }

            Function::Hermite => {
                let [x0, y0, x1, y1, rx0, ry0, rx1, ry1] = numbers::<8>(command, arguments)?;
                let mut edges = matrix::new();
                add_hermite_curve(&mut edges, x0, y0, x1, y1, rx0, ry0, rx1, ry1, PARAMETRIC_STEPS);
                self.render_edges(edges);
            }

            Function::Bezier => {
                let [x0, y0, x1, y1, x2, y2, x3, y3] = numbers::<8>(command, arguments)?;
                let mut edges = matrix::new();
                add_bezier_curve(&mut edges, x0, y0, x1, y1, x2, y2, x3, y3, PARAMETRIC_STEPS);
                self.render_edges(edges);
            }

            Function::Polygon => {
                let [x0, y0, z0, x1, y1, z1, x2, y2, z2] = numbers::<9>(command, arguments)?;
                let mut polygons = matrix::new();
                add_polygon(&mut polygons, x0, y0, z0, x1, y1, z1, x2, y2, z2);
                self.render_polygons(polygons);
            }

            Function::Box => {
                let [x, y, z, w, h, d] = numbers::<6>(command, arguments)?;
                let mut polygons = matrix::new();
                add_box(&mut polygons, x, y, z, w, h, d);
                self.render_polygons(polygons);
            }

            Function::Sphere => {
                let [x, y, z, r] = numbers::<4>(command, arguments)?;
                let mut polygons = matrix::new();
                add_sphere(&mut polygons, x, y, z, r, SURFACE_STEPS);
                self.render_polygons(polygons);
            }

            Function::Torus => {
                let [x, y, z, r0, r1] = numbers::<5>(command, arguments)?;
                let mut polygons = matrix::new();
                add_torus(&mut polygons, x, y, z, r0, r1, SURFACE_STEPS);
                self.render_polygons(polygons);
            }
        }

        Ok(())
    }

    fn render_edges(&mut self, mut edges: Matrix) {
        self.coordinate_stack.transform(&mut edges);
        render_edges(&edges, &mut self.picture, &self.color);
    }

    fn render_polygons(&mut self, mut polygons: Matrix) {
        self.coordinate_stack.transform(&mut polygons);
        render_polygons(&polygons, &mut self.picture, &self.color);
    }

    fn write_picture(&self, file_name: &Path) -> Result<(), CommandError> {
        let path = self.output_dir.join(file_name);

        self.picture
            .save_as_file(&path)
            .map_err(|source| CommandError::Image { path: path.clone(), source })?;

        log::info!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
impl<W: Write> ScriptContext<W> {
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    pub fn coordinate_stack(&self) -> &CoordinateStack {
        &self.coordinate_stack
    }

    pub fn into_trace(self) -> W {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::{interpreter::lexer::ScriptReader, matrix::identity};

    struct Run {
        context: ScriptContext<Vec<u8>>,
        result: Result<Termination, ScriptError>,
        dir: TempDir,
    }

    impl Run {
        fn trace(self) -> String {
            String::from_utf8(self.context.into_trace()).unwrap()
        }
    }

    fn execute_script(script: &str) -> Run {
        let dir = tempfile::tempdir().unwrap();
        let mut context = ScriptContext::new(vec![], dir.path());
        let result = context.run(ScriptReader::new(Cursor::new(script.as_bytes().to_vec())));

        Run { context, result, dir }
    }

    const WHITE: Color = (255, 255, 255);
    const BLACK: Color = (0, 0, 0);

    #[test]
    fn echoes_each_command_line() {
        let run = execute_script("# setup\npush\n\n// draw\nline\n0 0 0 10 0 0\npop\n");

        assert_eq!(run.result.as_ref().unwrap(), &Termination::EndOfInput);
        assert_eq!(run.trace(), ":push\n:line\n:pop\n");
    }

    #[test]
    fn diagnostics_follow_their_command() {
        let run = execute_script("push\nfoo\npop\npop\nrotate\nw 90\n");

        assert_eq!(
            run.trace(),
            ":push\n\
             :foo\n\
             Error: unrecognized command 'foo'\n\
             :pop\n\
             :pop\n\
             Error: 'pop' cannot remove the base coordinate system\n\
             :rotate\n\
             Error: w is not a valid axis\n"
        );
    }

    #[test]
    fn draws_a_line_in_base_coordinates() {
        let run = execute_script("line\n0 0 0 10 0 0\n");
        let picture = run.context.picture();

        for x in 0..=10 {
            assert_eq!(picture.get(x, 0), Some(WHITE));
            assert_eq!(picture.z_buffer[0][x], 0.0);
        }
        assert_eq!(picture.get(11, 0), Some(BLACK));
        assert_eq!(picture.get(5, 1), Some(BLACK));
    }

    #[test]
    fn malformed_arguments_leave_picture_untouched() {
        let setup = "circle\n250 250 0 100\n";
        let baseline = execute_script(setup);

        for bad in ["line\n0 0 0 10 0\n", "box\n0 0 0 a 1 1\n", "sphere\n1 2 3 4 5\n", "polygon\n\n"] {
            let run = execute_script(&format!("{setup}{bad}"));
            assert_eq!(run.context.picture(), baseline.context.picture(), "{bad:?}");
        }
    }

    #[test]
    fn malformed_line_is_consumed_and_run_continues() {
        let run = execute_script("line\n0 0 0 10 0\nline\n0 5 0 10 5 0\n");

        assert_eq!(run.context.picture().get(3, 5), Some(WHITE));
        assert_eq!(run.context.picture().get(3, 0), Some(BLACK));
        assert_eq!(
            run.trace(),
            ":line\nError: 'line' requires 6 arguments of type double, found 5\n:line\n"
        );
    }

    #[test]
    fn missing_parameter_line_reports_zero() {
        let run = execute_script("torus\n");

        assert_eq!(run.result.as_ref().unwrap(), &Termination::EndOfInput);
        assert_eq!(run.trace(), ":torus\nError: 'torus' requires 5 arguments of type double, found 0\n");
    }

    #[test]
    fn every_command_accepts_its_own_arity() {
        for (keyword, command) in COMMANDS.iter() {
            if let Schema::Numbers(count) = command.function.schema() {
                let values = vec!["1"; count].join(" ");
                let run = execute_script(&format!("{keyword}\n{values}\n"));
                assert_eq!(run.trace(), format!(":{keyword}\n"), "{keyword}");
            }
        }
    }

    #[test]
    fn parameter_line_may_follow_comments_and_blank_lines() {
        let run = execute_script("line\n# note\n\n0 0 0 10 0 0\n");

        assert_eq!(run.context.picture().get(10, 0), Some(WHITE));
        assert_eq!(run.trace(), ":line\n");
    }

    #[test]
    fn carriage_return_on_parameter_line_aborts_before_drawing() {
        let run = execute_script("line\n0 0 0 10 0 0\r\n");

        assert!(matches!(run.result, Err(ScriptError::LineEnding { line: 2 })));
        assert!(run.context.picture().z_buffer.iter().flatten().all(|z| *z == f32::NEG_INFINITY));
        assert_eq!(run.trace(), ":line\n");
    }

    #[test]
    fn huge_coordinates_are_clipped() {
        let run = execute_script("line\n0 0 0 1e20 0 0\nsave\nhuge.png\n");

        assert_eq!(run.result.as_ref().unwrap(), &Termination::EndOfInput);
        assert_eq!(run.context.picture().get(499, 0), Some(WHITE));
        assert!(run.dir.path().join("huge.png").exists());
    }

    #[test]
    fn out_of_range_number_is_a_malformed_token() {
        let run = execute_script("line\n0 0 0 1e39 0 0\n");

        assert_eq!(run.context.picture().get(0, 0), Some(BLACK));
        assert_eq!(run.trace(), ":line\nError: 'line' requires 6 arguments of type double, found 3\n");
    }

    #[test]
    fn overflowing_transformations_draw_nothing() {
        let run = execute_script("scale\n1e30 1e30 1e30\nscale\n1e30 1e30 1e30\nline\n0 0 0 1 1 0\nsphere\n0 0 0 1\n");

        assert_eq!(run.result.as_ref().unwrap(), &Termination::EndOfInput);
        assert!(run.context.picture().z_buffer.iter().flatten().all(|z| *z == f32::NEG_INFINITY));
    }

    #[test]
    fn pop_at_base_keeps_one_system() {
        let run = execute_script("pop\n");

        assert_eq!(run.context.coordinate_stack().height(), 1);
        assert_eq!(run.context.coordinate_stack().peek(), &identity());
    }

    #[test]
    fn push_pop_isolates_transformations() {
        let run = execute_script("move\n5 5 0\npush\nscale\n3 3 3\npop\n");

        assert_eq!(run.context.coordinate_stack().height(), 1);
        assert_eq!(run.context.coordinate_stack().peek(), &matrix::translation(5.0, 5.0, 0.0));
    }

    #[test]
    fn invalid_axis_leaves_stack_unchanged() {
        let run = execute_script("rotate\nq 45\nrotate\nz\n");

        assert_eq!(run.context.coordinate_stack().peek(), &identity());
        assert!(run.trace().ends_with(":rotate\nError: 'rotate' requires 2 arguments (axis and angle), found 1\n"));
    }

    #[test]
    fn geometry_is_drawn_in_the_current_system() {
        let run = execute_script("translate\n100 100 0\nmove\n0 50 0\nscale\n2 2 2\nline\n0 0 0 10 0 0\n");
        let picture = run.context.picture();

        assert_eq!(picture.get(100, 150), Some(WHITE));
        assert_eq!(picture.get(120, 150), Some(WHITE));
        assert_eq!(picture.get(121, 150), Some(BLACK));
        assert_eq!(picture.get(5, 0), Some(BLACK));
    }

    #[test]
    fn color_applies_to_later_drawing() {
        let run = execute_script("color\n255 0 0\nline\n0 0 0 4 0 0\ncolor\n0 0 255\nline\n0 2 0 4 2 0\n");
        let picture = run.context.picture();

        assert_eq!(picture.get(2, 0), Some((255, 0, 0)));
        assert_eq!(picture.get(2, 2), Some((0, 0, 255)));
    }

    #[test]
    fn background_waits_for_clear() {
        let before_clear = execute_script("line\n0 0 0 4 0 0\nbackground\n10 20 30\n");
        assert_eq!(before_clear.context.picture().get(2, 2), Some(BLACK));
        assert_eq!(before_clear.context.picture().get(2, 0), Some(WHITE));

        let run = execute_script("line\n0 0 0 4 0 0\nbackground\n10 20 30\nclear\n");
        let picture = run.context.picture();
        assert_eq!(picture.get(2, 0), Some((10, 20, 30)));
        assert!(picture.z_buffer.iter().flatten().all(|z| *z == f32::NEG_INFINITY));
    }

    #[test]
    fn solids_hide_what_is_behind_them() {
        let run = execute_script("color\n0 255 0\nbox\n0 0 -50 100 100 10\ncolor\n255 0 0\nsphere\n50 50 -200 40\n");

        assert_eq!(run.context.picture().get(50, 50), Some((0, 255, 0)));
    }

    #[test]
    fn quit_stops_the_run() {
        let run = execute_script("push\nquit\nline\n0 0 0 10 0 0\n");

        assert_eq!(run.result.as_ref().unwrap(), &Termination::Quit);
        assert_eq!(run.context.picture().get(5, 0), Some(BLACK));
        assert_eq!(run.trace(), ":push\n:quit\n");
    }

    #[test]
    fn save_writes_the_picture() {
        let run = execute_script("line\n0 0 0 10 0 0\nsave\nout.png\n");
        let image = image::open(run.dir.path().join("out.png")).unwrap().to_rgb8();

        assert_eq!(image.dimensions(), (500, 500));
        // image rows run top to bottom
        for x in 0..=10 {
            assert_eq!(image.get_pixel(x, 499).0, [255, 255, 255]);
        }
        assert_eq!(image.get_pixel(11, 499).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(5, 498).0, [0, 0, 0]);
    }

    #[test]
    fn display_numbers_its_files() {
        let run = execute_script("display\nline\n0 0 0 10 0 0\ndisplay\n");

        let first = image::open(run.dir.path().join("display-0.png")).unwrap().to_rgb8();
        let second = image::open(run.dir.path().join("display-1.png")).unwrap().to_rgb8();
        assert_eq!(first.get_pixel(5, 499).0, [0, 0, 0]);
        assert_eq!(second.get_pixel(5, 499).0, [255, 255, 255]);
        assert!(!run.dir.path().join("display-2.png").exists());
    }

    #[test]
    fn save_without_file_name() {
        let run = execute_script("save\n");

        assert_eq!(run.trace(), ":save\nError: 'save' requires a filename, none given\n");
    }

    #[test]
    fn failed_write_is_recoverable() {
        let run = execute_script("save\nmissing/dir/out.png\nsave\nout.png\n");

        assert!(run.dir.path().join("out.png").exists());
        let trace = run.trace();
        assert!(trace.contains("Error: could not write"), "{trace}");
        assert!(trace.ends_with(":save\n"), "{trace}");
    }

    #[test]
    fn carriage_return_aborts_but_keeps_earlier_output() {
        let run = execute_script("save\nfirst.png\nline\r\n0 0 0 10 0 0\nsave\nsecond.png\n");

        assert!(matches!(run.result, Err(ScriptError::LineEnding { line: 3 })));
        assert!(run.dir.path().join("first.png").exists());
        assert!(!run.dir.path().join("second.png").exists());
    }
}
