/// What a command expects on the line that follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    Nothing,
    Numbers(usize),
    Rotation,
    Rgb,
    FileName,
}

impl Schema {
    pub fn takes_argument_line(&self) -> bool {
        !matches!(self, Schema::Nothing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    // GENERAL
    Display,
    Save,
    Clear,
    Quit,
    SetColor,
    SetBackground,

    // TRANSFORMATIONS
    Push,
    Pop,
    Move,
    Scale,
    Rotate,

    // EDGES
    Line,
    Circle,
    Hermite,
    Bezier,

    // POLYGONS
    Polygon,
    Box,
    Sphere,
    Torus,
}

impl Function {
    pub fn schema(&self) -> Schema {
        match self {
            Function::Display | Function::Clear | Function::Quit | Function::Push | Function::Pop => Schema::Nothing,
            Function::Save => Schema::FileName,
            Function::SetColor | Function::SetBackground => Schema::Rgb,
            Function::Rotate => Schema::Rotation,
            Function::Move | Function::Scale => Schema::Numbers(3),
            Function::Line | Function::Box => Schema::Numbers(6),
            Function::Circle | Function::Sphere => Schema::Numbers(4),
            Function::Torus => Schema::Numbers(5),
            Function::Hermite | Function::Bezier => Schema::Numbers(8),
            Function::Polygon => Schema::Numbers(9),
        }
    }
}

/// A recognized command line.
#[derive(Clone, Copy, Debug)]
pub struct Command {
    pub name: &'static str,
    pub function: Function,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_commands_take_numbers() {
        assert_eq!(Function::Line.schema(), Schema::Numbers(6));
        assert_eq!(Function::Polygon.schema(), Schema::Numbers(9));
        assert_eq!(Function::Torus.schema(), Schema::Numbers(5));
        assert!(!Function::Push.schema().takes_argument_line());
        assert!(Function::Save.schema().takes_argument_line());
    }
}
