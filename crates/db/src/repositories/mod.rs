pub mod note_repo;

pub use note_repo::NoteRepo;
