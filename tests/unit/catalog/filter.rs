use super::*;
use crate::catalog::model::Media;

fn p(title: &str, sub: Subcategory) -> Project {
    Project {
        title: title.to_owned(),
        description: String::new(),
        tools: vec![],
        media: Media::Image {
            src: "x.png".to_owned(),
        },
        link: "#".to_owned(),
        category: sub.category(),
        subcategory: sub,
    }
}

fn sample() -> Vec<Project> {
    vec![
        p("a", Subcategory::ReactApps),
        p("seo-1", Subcategory::Seo),
        p("b", Subcategory::ReactApps),
        p("seo-2", Subcategory::Seo),
        p("c", Subcategory::ReactApps),
    ]
}

fn titles(v: &[&Project]) -> Vec<String> {
    v.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn category_with_all_subcategories_keeps_catalog_order() {
    let projects = sample();
    let mut sel = Selection::all();
    sel.select_category(CategoryFilter::Only(Category::WebDevelopment));
    assert_eq!(titles(&visible_projects(&projects, &sel)), ["a", "b", "c"]);
}

#[test]
fn all_category_returns_everything() {
    let projects = sample();
    assert_eq!(visible_projects(&projects, &Selection::all()).len(), 5);
}

#[test]
fn subcategory_narrows_within_category() {
    let projects = sample();
    let mut sel = Selection::all();
    sel.select_category(CategoryFilter::Only(Category::DigitalMarketing));
    sel.select_subcategory(SubcategoryFilter::Only(Subcategory::Seo))
        .unwrap();
    assert_eq!(titles(&visible_projects(&projects, &sel)), ["seo-1", "seo-2"]);
}

#[test]
fn predicate_matches_definition_exhaustively() {
    let projects = sample();
    let mut cats = vec![CategoryFilter::All];
    cats.extend(Category::ALL.map(CategoryFilter::Only));

    for cat in cats {
        let mut subs = vec![SubcategoryFilter::All];
        if let CategoryFilter::Only(c) = cat {
            subs.extend(
                Subcategory::ALL
                    .into_iter()
                    .filter(|s| s.category() == c)
                    .map(SubcategoryFilter::Only),
            );
        }
        for sub in subs {
            let mut sel = Selection::all();
            sel.select_category(cat);
            sel.select_subcategory(sub).unwrap();

            let expected: Vec<&Project> = projects
                .iter()
                .filter(|p| match cat {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(c) => {
                        p.category == c
                            && match sub {
                                SubcategoryFilter::All => true,
                                SubcategoryFilter::Only(s) => p.subcategory == s,
                            }
                    }
                })
                .collect();
            assert_eq!(visible_projects(&projects, &sel), expected);
        }
    }
}

#[test]
fn switching_category_resets_subcategory_in_one_step() {
    let mut sel = Selection::all();
    sel.select_category(CategoryFilter::Only(Category::DigitalMarketing));
    sel.select_subcategory(SubcategoryFilter::Only(Subcategory::Seo))
        .unwrap();

    sel.select_category(CategoryFilter::Only(Category::WebDevelopment));
    assert_eq!(sel.category(), CategoryFilter::Only(Category::WebDevelopment));
    assert_eq!(sel.subcategory(), SubcategoryFilter::All);

    sel.select_category(CategoryFilter::All);
    assert_eq!(sel.subcategory(), SubcategoryFilter::All);
}

#[test]
fn out_of_scope_subcategory_is_rejected_without_change() {
    let mut sel = Selection::all();
    assert!(
        sel.select_subcategory(SubcategoryFilter::Only(Subcategory::Seo))
            .is_err()
    );
    assert_eq!(sel, Selection::all());

    sel.select_category(CategoryFilter::Only(Category::WebDevelopment));
    assert!(
        sel.select_subcategory(SubcategoryFilter::Only(Subcategory::Seo))
            .is_err()
    );
    assert_eq!(sel.subcategory(), SubcategoryFilter::All);
}

#[test]
fn empty_match_yields_explicit_empty_view() {
    let catalog = Catalog::builtin();
    let mut gallery = ProjectGallery::new();
    gallery.select_category(CategoryFilter::Only(Category::WebDevelopment));
    gallery
        .select_subcategory(SubcategoryFilter::Only(Subcategory::LandingPages))
        .unwrap();

    let view = gallery.view(&catalog);
    assert!(view.is_empty());
    assert_eq!(
        view,
        GalleryView::Empty {
            category: CategoryFilter::Only(Category::WebDevelopment),
            subcategory: SubcategoryFilter::Only(Subcategory::LandingPages),
        }
    );
}

#[test]
fn subcategory_options_follow_category() {
    let catalog = Catalog::builtin();
    let mut gallery = ProjectGallery::new();
    assert!(gallery.subcategory_options(&catalog).is_empty());
    gallery.select_category(CategoryFilter::Only(Category::DigitalMarketing));
    let ids: Vec<Subcategory> = gallery
        .subcategory_options(&catalog)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|s| s.category() == Category::DigitalMarketing));
}

#[test]
fn filters_parse_from_cli_ids() {
    assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!(
        "web-development".parse::<CategoryFilter>().unwrap(),
        CategoryFilter::Only(Category::WebDevelopment)
    );
    assert_eq!(
        "react-apps".parse::<SubcategoryFilter>().unwrap(),
        SubcategoryFilter::Only(Subcategory::ReactApps)
    );
    assert!("nope".parse::<SubcategoryFilter>().is_err());
}
