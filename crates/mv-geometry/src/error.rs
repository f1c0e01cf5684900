use thiserror::Error;

pub type GeometryResult<T> = Result<T, GeometryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Switch states {raw:?} do not select a hexagon sector")]
    UnreachableSector { raw: [f64; 3] },
}
