use std::path::Path;

use crate::core::{
    Environment, Invocation, ReportOutcome, ReportPlan, allocate_path, render_body, topic_slug,
};
use crate::error::AppError;
use crate::utils::{debug_log, resolve_date, write_report};

/// Resolve date, slug and a free target path without touching the filesystem
/// beyond the `exists` probe.
pub(crate) fn plan_report<F>(
    invocation: &Invocation,
    env: &Environment,
    exists: F,
) -> Result<ReportPlan, AppError>
where
    F: Fn(&Path) -> bool,
{
    // Whitespace-only topics are allowed and take the hash fallback slug.
    if invocation.topic.is_empty() {
        return Err(AppError::EmptyTopic);
    }

    let date = resolve_date(invocation.date.as_deref(), env.today)?;

    let slug = topic_slug(&invocation.topic);
    let how = if slug.fallback { "hash fallback" } else { "from topic" };
    debug_log!("slug: {} ({how})", slug.value);

    // An absolute base dir replaces cwd entirely when joined.
    let dir = env.cwd.join(&invocation.base_dir);
    let path = allocate_path(&dir, &date, &slug.value, exists)?;

    Ok(ReportPlan {
        dir,
        path,
        date,
        slug: slug.value,
    })
}

/// Run one invocation: plan, then either stop (dry run) or render and write.
///
/// Returns the text to print. It is produced before anything is written, so
/// an output failure leaves the filesystem untouched.
pub(crate) fn run(
    invocation: &Invocation,
    env: &Environment,
    json: bool,
) -> Result<String, AppError> {
    let plan = plan_report(invocation, env, Path::exists)?;
    let outcome = ReportOutcome::new(&plan, !invocation.dry_run);
    let output = format_outcome(&outcome, json)?;

    if invocation.dry_run {
        debug_log!("dry run, nothing written");
        return Ok(output);
    }

    let body = render_body(&invocation.topic, &plan.date, &env.cwd);
    write_report(&plan.dir, &plan.path, &body)?;
    Ok(output)
}

/// Format the outcome for stdout: the bare path, or a JSON object.
pub(crate) fn format_outcome(outcome: &ReportOutcome, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(outcome)?)
    } else {
        Ok(outcome.path.display().to_string())
    }
}
