// Discrete
pub mod ShiftedGeometric;
