// Public webhook for third-party integrations.
// Supports resume and cover letter generation only; no caller identity.

pub mod handlers;
