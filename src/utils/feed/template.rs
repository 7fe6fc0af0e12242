// description template

use super::config::FeedConfig;
use crate::utils::changelog::ParsedChangelog;
use tracing::debug;

const LIST_STYLE: &str = "<style>ul{margin-top: 0;margin-bottom: 7;padding-left: 18;}</style>";
const POSTSCRIPT_SEPARATOR: &str = "<br>";

/// fixed-layout `<description>` template for update feeds
///
/// item text is inserted verbatim; nothing is escaped, the whole body sits
/// inside a CDATA section
#[derive(Debug, Clone, Default)]
pub struct FeedTemplate {
    config: FeedConfig,
}

impl FeedTemplate {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// render the four item sequences into the description fragment
    pub fn render(
        &self,
        changelog_cn: &[String],
        changelog_en: &[String],
        ps_cn: &[String],
        ps_en: &[String],
    ) -> String {
        debug!(
            product = %self.config.product_name,
            items_cn = changelog_cn.len(),
            items_en = changelog_en.len(),
            "rendering description"
        );

        let product = &self.config.product_name;
        let lines = [
            "    <description>".to_string(),
            "        <![CDATA[".to_string(),
            format!("            {}", LIST_STYLE),
            format!("            <h4>{} 更新日志: </h4>", product),
            "            <ul>".to_string(),
            format!("                {}", list_items(changelog_cn)),
            "            </ul>".to_string(),
            format!("            <h4>PS: {}</h4>", ps_cn.join(POSTSCRIPT_SEPARATOR)),
            "            <hr>".to_string(),
            format!("            <h4>{} Changes: </h4>", product),
            "            <ul>".to_string(),
            format!("                {}", list_items(changelog_en)),
            "            </ul>".to_string(),
            format!("            <h4>PS: {}</h4>", ps_en.join(POSTSCRIPT_SEPARATOR)),
            "        ]]>".to_string(),
            "    </description>".to_string(),
        ];

        format!("\n{}\n    ", lines.join("\n"))
    }

    pub fn render_changelog(&self, parsed: &ParsedChangelog) -> String {
        self.render(
            &parsed.changelog_cn,
            &parsed.changelog_en,
            &parsed.ps_cn,
            &parsed.ps_en,
        )
    }
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// render with the default template
pub fn render(
    changelog_cn: &[String],
    changelog_en: &[String],
    ps_cn: &[String],
    ps_en: &[String],
) -> String {
    FeedTemplate::default().render(changelog_cn, changelog_en, ps_cn, ps_en)
}

impl ParsedChangelog {
    /// render this changelog with the default template
    pub fn to_description(&self) -> String {
        FeedTemplate::default().render_changelog(self)
    }
}
