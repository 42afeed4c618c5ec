//! The statements behind each route. Placeholders arrive untyped; those bound
//! to non-text columns are read as text and cast explicitly.

pub const SELECT_COURSES: &str = "SELECT * FROM courses";

pub const INSERT_COURSE: &str = "INSERT INTO courses (course_name, professor, start_date, end_date) \
     VALUES ($1, $2, $3::text::date, $4::text::date) RETURNING *";

pub const UPDATE_COURSE: &str = "UPDATE courses \
     SET course_name = $1, professor = $2, start_date = $3::text::date, end_date = $4::text::date \
     WHERE id = $5::text::integer RETURNING *";

pub const DELETE_COURSE: &str = "DELETE FROM courses WHERE id = $1::text::integer RETURNING *";

pub const INSERT_ASSIGNMENT: &str = "INSERT INTO assignments (course_id, title, due_date) \
     VALUES ($1::text::integer, $2, $3::text::date) RETURNING *";

pub const UPDATE_ASSIGNMENT: &str = "UPDATE assignments SET title = $1, due_date = $2::text::date \
     WHERE id = $3::text::integer RETURNING *";

pub const DELETE_ASSIGNMENT: &str = "DELETE FROM assignments WHERE id = $1::text::integer RETURNING *";

pub const UPDATE_ASSIGNMENT_STATUS: &str =
    "UPDATE assignments SET status = $1 WHERE id = $2::text::integer RETURNING *";

pub const SELECT_ASSIGNMENTS_FOR_COURSE: &str =
    "SELECT * FROM assignments WHERE course_id = $1::text::integer";
