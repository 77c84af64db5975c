/// Reusable UI components

use yew::prelude::*;

const QR_IMAGE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Properties, PartialEq)]
pub struct QrCodeProps {
    /// The text the QR code encodes, here always the current short URL.
    pub value: String,
    #[prop_or(180)]
    pub size: u32,
}

/// QR code for a short URL, rendered by a public QR image service.
#[function_component(QrCode)]
pub fn qr_code(props: &QrCodeProps) -> Html {
    html! {
        <div class="qr-card">
            <h2 class="qr-title">{"QR Code:"}</h2>
            <img
                src={qr_image_url(&props.value, props.size)}
                alt="QR code for the shortened URL"
                width={props.size.to_string()}
                height={props.size.to_string()}
            />
        </div>
    }
}

fn qr_image_url(value: &str, size: u32) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("size", &format!("{size}x{size}"))
        .append_pair("data", value)
        .finish();
    format!("{QR_IMAGE_ENDPOINT}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_image_url_encodes_data() {
        let url = qr_image_url("https://tinyurl.com/abc?x=1&y=2", 180);
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=180x180&data=https%3A%2F%2Ftinyurl.com%2Fabc%3Fx%3D1%26y%3D2"
        );
    }

    #[test]
    fn test_qr_image_url_uses_requested_size() {
        let url = qr_image_url("https://tinyurl.com/abc", 256);
        assert!(url.contains("size=256x256"));
    }
}
