//! Pure record-list + filter → HTML fragment rendering for the project grid.
//! Output depends only on its inputs; the embedding page owns where it lands.

use crate::records::{CategoryFilter, Link, Media, ProjectRecord};

/// Shown when a filter matches nothing.
const EMPTY_STATE: &str = r#"<div class="col-12">
    <div class="alert alert-warning" role="status">No projects available for this category just yet. Check back soon!</div>
</div>"#;

/// Render the card grid for every record matching `filter`.
pub fn render_grid(records: &[ProjectRecord], filter: CategoryFilter) -> String {
    let cards: Vec<String> = records
        .iter()
        .filter(|record| filter.matches(record.category))
        .map(render_card)
        .collect();

    if cards.is_empty() {
        return EMPTY_STATE.to_string();
    }

    cards.join("\n")
}

/// Number of records the filter would render.
pub fn match_count(records: &[ProjectRecord], filter: CategoryFilter) -> usize {
    records
        .iter()
        .filter(|record| filter.matches(record.category))
        .count()
}

fn render_card(record: &ProjectRecord) -> String {
    format!(
        r#"<div class="col-12 col-md-6 col-lg-4 project-col" data-category="{category}">
    <article class="card h-100 border-0 shadow-sm project-card">
        {media}
        <div class="card-body d-flex flex-column">
            <span class="badge bg-primary mb-3 text-uppercase small">{category}</span>
            <h3 class="card-title h5">{title}</h3>
            <p class="text-muted card-text">{description}</p>
            <div class="d-flex flex-wrap gap-2 mb-3">{stack}</div>
            <div class="mt-auto d-flex flex-wrap gap-2">{links}</div>
        </div>
    </article>
</div>"#,
        category = record.category.as_str(),
        media = media_markup(record),
        title = record.title,
        description = record.description,
        stack = stack_markup(record.stack),
        links = links_markup(record.links),
    )
}

fn media_markup(record: &ProjectRecord) -> String {
    match record.media {
        Media::Frame { src, title } => format!(
            r#"<div class="ratio ratio-16x9 project-card-media"><iframe src="{src}" title="{title}" loading="lazy" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen referrerpolicy="strict-origin-when-cross-origin"></iframe></div>"#
        ),
        Media::Image { src, alt } => format!(
            r#"<a class="project-card-media d-block overflow-hidden" href="{href}" target="_blank" rel="noopener"><img class="card-img-top project-card-image" src="{src}" alt="{alt}" loading="lazy"></a>"#,
            href = record.primary_url(),
        ),
    }
}

fn stack_markup(stack: &[&str]) -> String {
    stack
        .iter()
        .map(|tech| format!(r#"<span class="badge bg-light text-dark border">{tech}</span>"#))
        .collect::<Vec<_>>()
        .join("")
}

fn links_markup(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                r#"<a class="btn btn-outline-{variant} btn-sm" href="{url}" target="_blank" rel="noopener">{label}</a>"#,
                variant = link.variant.as_str(),
                url = link.url,
                label = link.label,
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CATALOGUE, Category};

    #[test]
    fn unfiltered_grid_renders_every_record() {
        let html = render_grid(CATALOGUE, CategoryFilter::All);
        for record in CATALOGUE {
            assert!(html.contains(record.title), "missing card for {}", record.id);
        }
        assert_eq!(
            html.matches("project-col").count(),
            CATALOGUE.len(),
            "one column wrapper per record"
        );
    }

    #[test]
    fn filter_keeps_only_matching_categories() {
        let filter = CategoryFilter::Only(Category::Markerless);
        let html = render_grid(CATALOGUE, filter);
        assert!(html.contains("Place The Gaming Chair"));
        assert!(!html.contains("Virtual Try-On"));
        assert_eq!(match_count(CATALOGUE, filter), 1);
    }

    #[test]
    fn empty_input_renders_empty_state() {
        let html = render_grid(&[], CategoryFilter::All);
        assert!(html.contains("alert-warning"));
        assert_eq!(match_count(&[], CategoryFilter::All), 0);
    }

    #[test]
    fn frame_media_uses_iframe_and_image_media_links_out() {
        let html = render_grid(CATALOGUE, CategoryFilter::All);
        assert!(html.contains("<iframe src=\"https://www.youtube.com/embed/"));
        assert!(html.contains(
            r#"allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen"#
        ));
        assert!(html.contains("card-img-top project-card-image"));
    }
}
