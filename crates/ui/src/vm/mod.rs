mod auth_vm;
mod editorial_vm;

pub use auth_vm::AuthFormVm;
pub use editorial_vm::{
    COPY_FEEDBACK, CodeBlockVm, EditorialVm, GUTTER_THRESHOLD, ProblemInfoVm, SectionVm,
    map_editorial, map_editorial_state, map_problem_info, render_inline, render_prose,
    sanitize_editorial_html,
};
