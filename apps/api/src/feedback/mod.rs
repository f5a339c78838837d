// Recruiter feedback on shortlisted candidates. Append-only.

pub mod handlers;
