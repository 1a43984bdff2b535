/// Use cases module containing application business logic orchestration
mod serialize_bom;

pub use serialize_bom::SerializeBomUseCase;
