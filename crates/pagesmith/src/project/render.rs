//! Markup projection.

use indexmap::IndexSet;

use pagesmith_core::layout::{Layout, LayoutPart};

use crate::template::TemplateProvider;

/// Tag referencing a separately generated component.
pub fn reference_tag(id: &str) -> String {
    format!("<{id} />")
}

/// Render `part` as page markup.
///
/// Leaves and sub-layouts become reference tags; containers render their
/// children in order and let `provider` wrap the result.
pub fn render_part(part: &LayoutPart, provider: &dyn TemplateProvider) -> String {
    match part {
        LayoutPart::InputText(meta) | LayoutPart::Button(meta) => reference_tag(meta.id()),
        LayoutPart::Table(meta) => reference_tag(meta.id()),
        LayoutPart::SubLayout(layout) => reference_tag(layout.id()),
        LayoutPart::Row(_) => provider.row(&render_children(part, provider)),
        LayoutPart::Col(col) => provider.col(col.span(), &render_children(part, provider)),
        LayoutPart::Tab(_) => provider.tab(&render_children(part, provider)),
        LayoutPart::TabPane(pane) => {
            provider.tab_pane(pane.label(), &render_children(part, provider))
        }
    }
}

fn render_children(part: &LayoutPart, provider: &dyn TemplateProvider) -> String {
    part.children()
        .iter()
        .map(|child| render_part(child, provider))
        .collect()
}

/// Standalone component source for a leaf, `None` for containers and
/// sub-layouts.
pub fn component_source(part: &LayoutPart, provider: &dyn TemplateProvider) -> Option<String> {
    match part {
        LayoutPart::InputText(meta) => Some(provider.input_text(meta)),
        LayoutPart::Button(meta) => Some(provider.button(meta)),
        LayoutPart::Table(meta) => Some(provider.table(meta)),
        LayoutPart::Row(_)
        | LayoutPart::Col(_)
        | LayoutPart::Tab(_)
        | LayoutPart::TabPane(_)
        | LayoutPart::SubLayout(_) => None,
    }
}

/// Aggregate page source: the title, one line per rendered top-level part
/// and an import per referenced component.
pub fn page_source(
    layout: &Layout,
    provider: &dyn TemplateProvider,
    imports: &IndexSet<String>,
    extension: &str,
) -> String {
    let mut out = String::new();
    out.push_str("<template>\n");
    out.push_str("  <div>\n");
    out.push_str(&format!("    <h1>{}</h1>\n", layout.title()));
    for part in layout.parts() {
        out.push_str(&render_part(part, provider));
        out.push('\n');
    }
    out.push_str("  </div>\n");
    out.push_str("</template>\n");
    out.push_str("<script setup>\n");
    for import in imports {
        out.push_str(&format!("import {import} from './{import}.{extension}'\n"));
    }
    out.push_str("</script>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_core::{builder::layout, meta::FieldMeta};
    use std::rc::Rc;

    use crate::template::ElementPlus;

    fn field(id: &str) -> FieldMeta {
        FieldMeta::new(id, id)
    }

    #[test]
    fn test_leaves_render_as_reference_tags() {
        let part = LayoutPart::InputText(field("OrderNo"));
        assert_eq!(render_part(&part, &ElementPlus), "<OrderNo />");
    }

    #[test]
    fn test_containers_wrap_children_in_order() {
        let page = layout("P", "p", |s| {
            s.row(|r| {
                r.col(8, |c| {
                    c.input(field("OrderNo"));
                });
                r.col(4, |c| {
                    c.button(field("Search"));
                });
            });
        });

        assert_eq!(
            render_part(&page.parts()[0], &ElementPlus),
            "<el-row><el-col :span=\"8\"><OrderNo /></el-col>\
             <el-col :span=\"4\"><Search /></el-col></el-row>"
        );
    }

    #[test]
    fn test_sub_layout_is_not_expanded() {
        let inner = Rc::new(layout("Inner", "inner", |s| {
            s.input(field("A"));
        }));
        let page = layout("P", "p", |s| {
            s.tab(|t| {
                t.pane("x", |p| {
                    p.include(Rc::clone(&inner));
                });
            });
        });

        assert_eq!(
            render_part(&page.parts()[0], &ElementPlus),
            "<el-tabs><el-tab-pane label=\"x\"><Inner /></el-tab-pane></el-tabs>"
        );
    }

    #[test]
    fn test_component_source_only_for_leaves() {
        assert!(component_source(&LayoutPart::Button(field("B")), &ElementPlus).is_some());
        let page = layout("P", "p", |s| {
            s.row(|_| {});
        });
        assert!(component_source(&page.parts()[0], &ElementPlus).is_none());
    }

    #[test]
    fn test_page_source_lists_imports() {
        let page = layout("Page", "受注画面", |s| {
            s.input(field("OrderNo"));
        });
        let imports: IndexSet<String> = ["OrderNo".to_string()].into_iter().collect();

        let source = page_source(&page, &ElementPlus, &imports, "vue");
        assert_eq!(
            source,
            "<template>\n  <div>\n    <h1>受注画面</h1>\n<OrderNo />\n  </div>\n</template>\n\
             <script setup>\nimport OrderNo from './OrderNo.vue'\n</script>\n"
        );
    }
}
