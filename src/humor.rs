//! Flavor text for assertion results and raw responses.
//!
//! Nothing here carries a contract beyond "non-empty, tone matches the
//! outcome". Callers sprinkle these lines into reports; the evaluator never
//! depends on them.

use rand::seq::SliceRandom;

use crate::assertions::AssertionResult;

const PASS_REMARKS: &[&str] = &[
    "The platypus is impressed with this assertion",
    "Nailed it! Even the platypus couldn't break this one",
    "Assertion passed. The platypus approves",
    "Perfect match. The platypus gives you a high-five",
];

const FAIL_REMARKS: &[&str] = &[
    "The platypus found a discrepancy. Time to investigate",
    "Assertion failed. The platypus is disappointed but not surprised",
    "Oops! The platypus detected an unexpected value",
    "This assertion didn't pass. The platypus suggests double-checking",
];

/// Pick a remark matching the result's outcome.
pub fn humorous_message(result: &AssertionResult) -> &'static str {
    let pool = if result.passed {
        PASS_REMARKS
    } else {
        FAIL_REMARKS
    };
    pool.choose(&mut rand::thread_rng()).copied().unwrap_or(pool[0])
}

const REMARKS_200: &[&str] = &[
    "Looks like this API had a good breakfast today",
    "Smooth as butter. The platypus approves",
    "200 OK - The only relationship status that matters",
    "This API is showing off. We love to see it",
    "Perfect response. Did you bribe the server?",
];

const REMARKS_201: &[&str] = &[
    "Created! Something new was born. Congratulations!",
    "201 - The API just became a parent",
    "Resource created successfully. The platypus is proud",
];

const REMARKS_204: &[&str] = &[
    "No content, but that's okay. Sometimes silence is golden",
    "204 - The strong, silent type",
    "Empty response. Minimalism at its finest",
];

const REMARKS_400: &[&str] = &[
    "Bad request. Did you type that with your elbows?",
    "The API is confused. So are we",
    "400 - Translation: 'What are you even asking for?'",
    "This request needs therapy",
];

const REMARKS_401: &[&str] = &[
    "Unauthorized. Did you forget your hall pass?",
    "The bouncer says no. Try showing some credentials",
    "401 - You shall not pass!",
];

const REMARKS_403: &[&str] = &[
    "Forbidden. This API has trust issues",
    "403 - Even with credentials, you're not invited",
    "Access denied. The API is playing hard to get",
];

const REMARKS_404: &[&str] = &[
    "Not found. Did you look under the couch?",
    "404 - This endpoint is on vacation",
    "Oops... searching for something that never existed?",
    "The API ghosted you. Classic 404 move",
];

const REMARKS_429: &[&str] = &[
    "Too many requests. The API needs a break",
    "Slow down there, speed racer",
    "429 - You're being too clingy",
];

const REMARKS_500: &[&str] = &[
    "Internal server error. It's not you, it's them",
    "500 - The server just had an existential crisis",
    "Something broke! But hey, at least you found a bug",
    "The API is having a bad day. We've all been there",
];

const REMARKS_502: &[&str] = &[
    "Bad gateway. The middleman messed up",
    "502 - Lost in translation between servers",
];

const REMARKS_503: &[&str] = &[
    "Service unavailable. The API is taking a nap",
    "503 - Currently out to lunch",
    "The server is on strike. Union rules",
];

const REMARKS_504: &[&str] = &[
    "Gateway timeout. The API is stuck in traffic",
    "504 - Still waiting... and waiting... and...",
];

/// One-liner commentary for a raw status code and latency. Unknown codes
/// fall back to their status class, then to a generic line.
pub fn status_comment(status_code: u16, response_time_ms: f64) -> String {
    let pool = status_pool(status_code);
    let base = match pool.choose(&mut rand::thread_rng()) {
        Some(line) => (*line).to_string(),
        None => format!(
            "Status {} - The platypus has never seen this before",
            status_code
        ),
    };

    if response_time_ms < 100.0 {
        format!("{} Lightning fast!", base)
    } else if response_time_ms > 3000.0 {
        format!("{} Took its sweet time though...", base)
    } else {
        base
    }
}

fn status_pool(status_code: u16) -> &'static [&'static str] {
    match status_code {
        200 => REMARKS_200,
        201 => REMARKS_201,
        204 => REMARKS_204,
        400 => REMARKS_400,
        401 => REMARKS_401,
        403 => REMARKS_403,
        404 => REMARKS_404,
        429 => REMARKS_429,
        500 => REMARKS_500,
        502 => REMARKS_502,
        503 => REMARKS_503,
        504 => REMARKS_504,
        other => match other / 100 {
            2 => REMARKS_200,
            4 => REMARKS_400,
            5 => REMARKS_500,
            _ => &[],
        },
    }
}
