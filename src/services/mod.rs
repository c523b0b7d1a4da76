pub mod occupancies;
pub mod occupants;
