const STATIC_CONTENT_PATH: &str = "/plugins/servlet/disapproval/static-content";

fn static_content_url(base_url: &str, file_name: &str) -> String {
    format!(
        "{}{STATIC_CONTENT_PATH}/{file_name}",
        base_url.trim_end_matches('/')
    )
}

/// Comment posted when a pull request gets disapproved.
pub fn disapproval_comment(base_url: &str) -> String {
    format!(
        "![ಠ_ಠ]({}) Pull request disapproved",
        static_content_url(base_url, "disapprovalface.png")
    )
}

/// Comment posted when a disapproval is removed.
pub fn disapproval_removed_comment(base_url: &str) -> String {
    format!(
        "![( ͡° ͜ʖ ͡°)]({}) Pull request disapproval removed",
        static_content_url(base_url, "undisapprovalface.png")
    )
}
