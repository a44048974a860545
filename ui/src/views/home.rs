use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Publikasi BPS Provinsi Sulawesi Tengah" }
            p { "Kelola daftar publikasi dan tambahkan publikasi baru dari menu di atas." }
        }
    }
}
