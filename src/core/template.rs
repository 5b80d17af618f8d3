use std::path::Path;

/// Render the default investigation report skeleton.
pub(crate) fn render_body(topic: &str, date: &str, repo_root: &Path) -> String {
    let repo_root = repo_root.display();
    format!(
        "# {topic} investigation report\n\
         \n\
         - Created on: {date}\n\
         - Topic: {topic}\n\
         - Target repository: `{repo_root}`\n\
         \n\
         ## TL;DR\n\
         - \n\
         \n\
         ## Topic and scope\n\
         - \n\
         \n\
         ## Method (where and how I investigated)\n\
         - Local investigation:\n\
         - External investigation:\n\
         \n\
         ## Findings (with evidence)\n\
         ### 1. \n\
         - Fact:\n\
         - Evidence:\n\
         \n\
         ## Impact / implications\n\
         - \n\
         \n\
         ## Open questions and risks\n\
         - \n\
         \n\
         ## Recommended next actions\n\
         1. \n\
         2. \n\
         \n\
         ## Sources\n\
         | Type | Path/URL | Key Points |\n\
         | --- | --- | --- |\n"
    )
}
