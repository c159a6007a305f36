use axum::response::Html;

/// `GET /`
pub async fn handle() -> Html<&'static str> {
    Html(FORM_PAGE)
}

// Mirrors application::session in the browser: one timer, cleared on reset.
const FORM_PAGE: &str = r#"<!doctype html>
<html>
    <head>
        <meta charset="utf-8">
        <title>YouTube Live Downloader</title>
    </head>
    <body>
        <h1>YouTube Live Downloader</h1>
        <p>Automatically get the video link when the live stream ends.</p>
        <form id="form">
            <input id="url" type="text" placeholder="https://www.youtube.com/live/..." size="60">
            <input type="submit" value="Start">
            <button id="reset" type="button">Reset</button>
        </form>
        <p>Status: <strong id="status">idle</strong></p>
        <p id="info"></p>
        <script>
            const PATTERNS = [
                /(?:youtube\.com\/watch\?v=|youtu\.be\/|youtube\.com\/live\/)([^&\s]+)/,
                /youtube\.com\/embed\/([^&\s]+)/,
            ];
            let timer = null;
            let epoch = 0;

            function extractVideoId(url) {
                for (const p of PATTERNS) {
                    const m = url.match(p);
                    if (m) return m[1];
                }
                return null;
            }

            function show(status, info) {
                document.getElementById("status").textContent = status;
                const el = document.getElementById("info");
                el.textContent = "";
                if (info.title) el.append(info.title + " by " + (info.author || "Unknown"), document.createElement("br"));
                if (info.downloadUrl) {
                    const a = document.createElement("a");
                    a.href = info.downloadUrl;
                    a.textContent = info.downloadUrl;
                    el.append(a, document.createElement("br"), "Use a YouTube downloader service with this URL");
                }
                if (info.errorMessage) el.append(info.errorMessage);
            }

            async function post(path, videoId) {
                const res = await fetch(path, {
                    method: "POST",
                    headers: { "Content-Type": "application/json" },
                    body: JSON.stringify({ videoId }),
                });
                return res.json();
            }

            async function processDownload(videoId, info, mine) {
                if (mine !== epoch) return;
                show("processing", info);
                await new Promise(r => setTimeout(r, 2000));
                if (mine !== epoch) return;
                try {
                    const data = await post("/download-video", videoId);
                    if (mine !== epoch) return;
                    if (data.success) show("completed", { ...info, downloadUrl: data.downloadUrl });
                    else show("error", { ...info, errorMessage: data.error || "Failed to process video" });
                } catch (e) {
                    if (mine === epoch) show("error", { ...info, errorMessage: "Failed to process download request" });
                }
            }

            function reset() {
                epoch++;
                if (timer) clearInterval(timer);
                timer = null;
                show("idle", {});
            }

            document.getElementById("reset").onclick = () => {
                reset();
                document.getElementById("url").value = "";
            };

            document.getElementById("form").onsubmit = async (e) => {
                e.preventDefault();
                reset();
                const mine = epoch;
                const url = document.getElementById("url").value;
                if (!url.trim()) return show("error", { errorMessage: "Please enter a YouTube URL" });
                const videoId = extractVideoId(url);
                if (!videoId) return show("error", { errorMessage: "Invalid YouTube URL. Please check and try again." });

                show("validating", {});
                let data;
                try { data = await post("/check-video", videoId); } catch (err) { data = { isValid: false }; }
                if (mine !== epoch) return;
                if (!data.isValid) return show("error", { errorMessage: "Invalid YouTube video or video not found" });

                const info = { title: data.title, author: data.author };
                if (!data.isLive) return processDownload(videoId, info, mine);

                show("live", info);
                timer = setInterval(async () => {
                    if (mine !== epoch) return;
                    let live = false;
                    try {
                        const d = await post("/check-video", videoId);
                        live = d.isValid ? d.isLive : false;
                    } catch (err) {}
                    if (!live && mine === epoch) {
                        clearInterval(timer);
                        timer = null;
                        processDownload(videoId, info, mine);
                    }
                }, 5000);
            };
        </script>
    </body>
</html>
"#;
