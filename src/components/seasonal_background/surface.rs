//! 2D drawing surface abstraction.
//!
//! Shapes and ambient effects draw through [`Surface`] rather than directly
//! on the canvas context, so the same routines run against the browser canvas
//! and against a recording fake in tests.

use web_sys::CanvasRenderingContext2d;

use super::season::Color;

/// A linear gradient between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
	/// Start point, where offset 0 sits.
	pub from: (f64, f64),
	/// End point, where offset 1 sits.
	pub to: (f64, f64),
	/// `(offset, color)` pairs, offsets in `0.0..=1.0`.
	pub stops: Vec<(f64, Color)>,
}

/// Fill style for paths and rectangles.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
	Solid(Color),
	Linear(LinearGradient),
}

impl From<Color> for Paint {
	fn from(color: Color) -> Self {
		Paint::Solid(color)
	}
}

/// The subset of the canvas 2D API the renderer needs.
///
/// Mirrors `CanvasRenderingContext2D` semantics: a current path, a transform
/// stack managed by `save`/`restore`, and fill/stroke styles.
pub trait Surface {
	fn save(&mut self);
	fn restore(&mut self);
	fn translate(&mut self, x: f64, y: f64);
	fn rotate(&mut self, angle: f64);
	fn set_global_alpha(&mut self, alpha: f64);
	/// Erase the `width × height` rectangle at the origin.
	fn clear(&mut self, width: f64, height: f64);

	fn begin_path(&mut self);
	fn close_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn line_to(&mut self, x: f64, y: f64);
	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
	#[allow(clippy::too_many_arguments)]
	fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
	#[allow(clippy::too_many_arguments)]
	fn ellipse(
		&mut self,
		x: f64,
		y: f64,
		radius_x: f64,
		radius_y: f64,
		rotation: f64,
		start: f64,
		end: f64,
	);

	fn set_fill(&mut self, paint: &Paint);
	fn set_stroke(&mut self, color: Color);
	fn set_line_width(&mut self, width: f64);
	fn fill(&mut self);
	fn stroke(&mut self);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn close_path(&mut self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
		CanvasRenderingContext2d::quadratic_curve_to(self, cpx, cpy, x, y);
	}

	fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
		CanvasRenderingContext2d::bezier_curve_to(self, cp1x, cp1y, cp2x, cp2y, x, y);
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
	}

	fn ellipse(
		&mut self,
		x: f64,
		y: f64,
		radius_x: f64,
		radius_y: f64,
		rotation: f64,
		start: f64,
		end: f64,
	) {
		let _ = CanvasRenderingContext2d::ellipse(
			self, x, y, radius_x, radius_y, rotation, start, end,
		);
	}

	fn set_fill(&mut self, paint: &Paint) {
		match paint {
			Paint::Solid(color) => self.set_fill_style_str(&color.to_css()),
			Paint::Linear(linear) => {
				let gradient =
					self.create_linear_gradient(linear.from.0, linear.from.1, linear.to.0, linear.to.1);
				for (offset, color) in &linear.stops {
					let _ = gradient.add_color_stop(*offset as f32, &color.to_css());
				}
				#[allow(deprecated)]
				self.set_fill_style(&gradient);
			}
		}
	}

	fn set_stroke(&mut self, color: Color) {
		self.set_stroke_style_str(&color.to_css());
	}

	fn set_line_width(&mut self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&mut self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}
}
