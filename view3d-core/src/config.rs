/// Viewer configuration and parsing of rotation triples
use nom::{
    character::complete::{char, multispace0},
    combinator::all_consuming,
    number::complete::float,
    sequence::{delimited, terminated},
    IResult,
};

use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::transform::RotationState;

/// Startup parameters for a viewer session
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Side of the square raster, in pixels
    pub raster_size: usize,
    /// Half the cube's edge length, in world units
    pub cube_edge: f32,
    /// Initial zoom, in pixels per world unit
    pub zoom: f32,
    /// Zoom change per wheel notch, also the minimum zoom
    pub zoom_step: f32,
    pub initial_rotation: RotationState,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        Raster::check_size(self.raster_size, self.raster_size)?;
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(Error::InvalidZoomStep(self.zoom_step));
        }
        if !self.zoom.is_finite() || self.zoom < self.zoom_step {
            return Err(Error::InvalidZoom {
                zoom: self.zoom,
                step: self.zoom_step,
            });
        }
        if !self.cube_edge.is_finite() || self.cube_edge <= 0.0 {
            return Err(Error::InvalidCubeEdge(self.cube_edge));
        }
        Ok(())
    }

    /// A blank raster of the configured size
    pub fn raster(&self) -> Result<Raster> {
        Raster::square(self.raster_size)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            raster_size: 300,
            cube_edge: 3.0,
            zoom: 10.0,
            zoom_step: 1.0,
            initial_rotation: RotationState::zero(),
        }
    }
}

/// Parse `"x,y,z"` degrees into a rotation, e.g. `"30, -15.5, 0"`
pub fn parse_rotation(input: &str) -> Result<RotationState> {
    match all_consuming(terminated(parse_triple, multispace0))(input) {
        Ok((_, (x, y, z))) if x.is_finite() && y.is_finite() && z.is_finite() => {
            Ok(RotationState::new(x, y, z))
        }
        _ => Err(Error::InvalidRotation(input.to_string())),
    }
}

fn parse_triple(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = separator(input)?;
    let (input, y) = float(input)?;
    let (input, _) = separator(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

fn separator(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}
