mod entry;

use faster_requests::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
