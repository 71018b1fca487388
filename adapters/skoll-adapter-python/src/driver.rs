//! The in-process Python driver loop.
//!
//! Protocol, one request/reply per cell:
//!
//! ```text
//!   harness → driver:  "<byte length>\n" + <utf-8 source>
//!   driver → harness:  {"outputs": [...]}\n
//! ```
//!
//! A zero-length header is the shutdown frame. All cell prints happen under
//! stdout redirection, so the reply channel stays clean.

/// Source of the driver loop, passed to `python3 -c`.
pub(crate) const DRIVER: &str = r#"
import ast, io, json, sys, traceback
from contextlib import redirect_stdout, redirect_stderr

scope = {"__name__": "__main__"}
stdin = sys.stdin.buffer

while True:
    header = stdin.readline()
    if not header:
        break
    length = int(header)
    if length == 0:
        break
    source = stdin.read(length).decode("utf-8")

    out, err = io.StringIO(), io.StringIO()
    results = []
    try:
        tree = ast.parse(source, mode="exec")
        tail = None
        if tree.body and isinstance(tree.body[-1], ast.Expr):
            tail = ast.Expression(tree.body.pop(-1).value)
        with redirect_stdout(out), redirect_stderr(err):
            exec(compile(tree, "<cell>", "exec"), scope)
            if tail is not None:
                value = eval(compile(tail, "<cell>", "eval"), scope)
                if value is not None:
                    results.append({"output_type": "execute_result",
                                    "data": {"text/plain": repr(value)},
                                    "metadata": {},
                                    "execution_count": None})
    except BaseException as exc:
        results.append({"output_type": "error",
                        "ename": type(exc).__name__,
                        "evalue": str(exc),
                        "traceback": traceback.format_exc().splitlines()})

    outputs = []
    if out.getvalue():
        outputs.append({"output_type": "stream", "name": "stdout", "text": out.getvalue()})
    if err.getvalue():
        outputs.append({"output_type": "stream", "name": "stderr", "text": err.getvalue()})
    outputs.extend(results)

    sys.stdout.write(json.dumps({"outputs": outputs}) + "\n")
    sys.stdout.flush()
"#;
