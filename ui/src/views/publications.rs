use dioxus::prelude::*;

#[component]
pub fn Publications() -> Element {
    rsx! {
        section { class: "page page-publications",
            h1 { "Daftar Publikasi" }
            p { class: "page__placeholder", "Belum ada publikasi yang ditampilkan." }
        }
    }
}

#[component]
pub fn AddPublication() -> Element {
    add_form(None)
}

/// Add form reopened on a saved draft (`/publications/add/:draft`).
#[component]
pub fn AddPublicationDraft(draft: String) -> Element {
    add_form(Some(&draft))
}

fn add_form(draft: Option<&str>) -> Element {
    rsx! {
        section { class: "page page-add-publication",
            h1 { "Tambah Publikasi" }
            if let Some(draft) = draft {
                p { class: "page__meta", "Draf: {draft}" }
            }
        }
    }
}
