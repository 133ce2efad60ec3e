use std::{cell::Cell, fmt, io, path};

use crate::Point;

/// How many snapshots the sweep writes: the finished mesh, one per inserted point, or one per flip as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
    AllSteps,
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    pub fn append_element<State, E: SvgElement<State>>(&mut self, element: &E, state: &State) -> fmt::Result {
        element.write_svg(self, state)
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
    current_step: Cell<u32>,
}

impl SvgContext {
    /// Configure snapshots from the environment. `None` unless an output path and a level above `None` are set.
    pub fn from_env(points: &[Point]) -> Option<Self> {
        let output_path = super::env::svg::output_path()?;
        let output_level = super::env::svg::output_level();
        let show_labels = super::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for p in points {
            view_x_min = view_x_min.min(p.x as f32);
            view_x_max = view_x_max.max(p.x as f32);
            view_y_min = view_y_min.min(p.y as f32);
            view_y_max = view_y_max.max(p.y as f32);
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(SvgContext {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
            current_step: Cell::new(0),
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }

    /// Write `element` to the next numbered file, if `level` is within the configured output level.
    /// Failures are ignored; snapshots are best-effort.
    pub fn output<E: SvgElement>(&self, level: SvgOutputLevel, element: &E) {
        if self.output_level < level {
            return;
        }

        let step = self.current_step.get();
        let mut svg = SvgOutput::new(self);
        if svg.append_element(element, &()).is_ok() {
            let _ = svg.save(format!("{:05}.svg", step));
        }
        self.current_step.set(step + 1);
    }
}

pub(crate) trait SvgElement<State=()> {
    fn write_svg<'a>(&self, svg_output: &mut SvgOutput<'a>, state: &State) -> fmt::Result;
}

/// The mesh and advancing hull at one moment of the sweep.
pub(crate) struct SweepSnapshot<'a> {
    pub points: &'a [Point],
    pub triangles: &'a [usize],
    pub hull: Vec<usize>,
    /// The point just inserted
    pub highlight: Option<usize>,
}

impl<'s> SvgElement for SweepSnapshot<'s> {
    fn write_svg<'a>(&self, svg_output: &mut SvgOutput<'a>, _state: &()) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let xy = |i: usize| [self.points[i].x as f32, self.points[i].y as f32];

        for t in self.triangles.chunks_exact(3) {
            let corners = [xy(t[0]), xy(t[1]), xy(t[2])];
            writeln!(svg_output, "{}",
                polygon(&corners)
                    .stroke(Stroke::Color(black(), svg_output.context.percent(0.1)))
                    .stroke_opacity(0.5)
            )?;
        }

        let hull: Vec<_> = self.hull.iter().map(|&i| xy(i)).collect();
        if hull.len() > 2 {
            writeln!(svg_output, "{}",
                polygon(&hull)
                    .stroke(Stroke::Color(rgb(255, 0, 255), svg_output.context.percent(0.3)))
            )?;
        }

        let r = svg_output.context.percent(0.5);
        for i in 0..self.points.len() {
            let [x, y] = xy(i);
            let color = if self.highlight == Some(i) {
                rgb(255, 126, 0)
            } else {
                green()
            };
            writeln!(svg_output, "{}", circle(x, y, r).fill(Fill::Color(color)))?;

            if svg_output.context.show_labels {
                let gap = svg_output.context.percent(1.0);
                writeln!(svg_output, "{}",
                    text(x - gap, y, format!("v{}", i))
                        .color(black())
                        .align(Align::Right)
                        .size(svg_output.context.percent(1.0))
                )?;
            }
        }
        Ok(())
    }
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}
